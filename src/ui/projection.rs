//! Pure projections from model data to display rows. Kept free of ratatui
//! types so formatting rules can be tested without a terminal.

use crate::model::holding::Holding;
use crate::model::quote::Quote;

/// How many quotes the Dashboard's market overview shows.
pub const OVERVIEW_LEN: usize = 3;

pub const MASKED_BALANCE: &str = "••••••";

#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    pub symbol: String,
    pub name: String,
    pub price_label: String,
    pub change_label: String,
    pub gaining: bool,
}

impl MarketRow {
    fn from_quote(quote: &Quote) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            name: quote.name.clone(),
            price_label: format_usd(quote.price),
            change_label: format_change(quote.change24h),
            gaining: quote.is_gaining(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketView {
    pub rows: Vec<MarketRow>,
}

impl MarketView {
    pub fn project(quotes: &[Quote]) -> Self {
        Self {
            rows: quotes.iter().map(MarketRow::from_quote).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioRow {
    pub symbol: String,
    pub name: String,
    pub value_label: String,
    pub change_label: String,
    pub gaining: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance_label: String,
    pub portfolio: Vec<PortfolioRow>,
    pub overview: Vec<MarketRow>,
}

impl DashboardView {
    pub fn project(
        quotes: &[Quote],
        holdings: &[Holding],
        total_balance: f64,
        balance_hidden: bool,
    ) -> Self {
        let balance_label = if balance_hidden {
            MASKED_BALANCE.to_string()
        } else {
            format_usd(total_balance)
        };
        let portfolio = holdings
            .iter()
            .map(|h| PortfolioRow {
                symbol: h.symbol.clone(),
                name: h.name.clone(),
                value_label: format_usd(h.value),
                change_label: format_change(h.change24h),
                gaining: h.change24h >= 0.0,
            })
            .collect();
        let overview = quotes
            .iter()
            .take(OVERVIEW_LEN)
            .map(MarketRow::from_quote)
            .collect();
        Self {
            balance_label,
            portfolio,
            overview,
        }
    }
}

/// `$29,499.49` style: two decimals, thousands separators.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// `+2.15%` / `-1.10%`, sign always shown for gains.
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(45230.75), "$45,230.75");
        assert_eq!(format_usd(0.58), "$0.58");
        assert_eq!(format_usd(15000.0), "$15,000.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn change_formatting_keeps_sign() {
        assert_eq!(format_change(2.15), "+2.15%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-1.1), "-1.10%");
    }
}
