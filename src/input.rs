use crossterm::event::KeyCode;

use crate::ui::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Navigate(Page),
    ToggleBalance,
    ToggleTheme,
    Quit,
}

pub fn parse_key(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Char('1') => Some(UiCommand::Navigate(Page::Dashboard)),
        KeyCode::Char('2') => Some(UiCommand::Navigate(Page::Market)),
        KeyCode::Char('3') => Some(UiCommand::Navigate(Page::Trade)),
        KeyCode::Char('4') => Some(UiCommand::Navigate(Page::Mining)),
        KeyCode::Char('5') => Some(UiCommand::Navigate(Page::Settings)),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(UiCommand::Quit),
            'd' => Some(UiCommand::Navigate(Page::Dashboard)),
            'm' => Some(UiCommand::Navigate(Page::Market)),
            't' => Some(UiCommand::Navigate(Page::Trade)),
            'g' => Some(UiCommand::Navigate(Page::Mining)),
            's' => Some(UiCommand::Navigate(Page::Settings)),
            'b' => Some(UiCommand::ToggleBalance),
            'l' => Some(UiCommand::ToggleTheme),
            _ => None,
        },
        _ => None,
    }
}
