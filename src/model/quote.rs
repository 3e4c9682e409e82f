/// A single tradable asset as displayed on the Market page.
///
/// `id` is the stable lookup key; `symbol` and `name` are display labels and
/// never change after seeding. `history` is oldest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change24h: f64,
    pub history: Vec<f64>,
}

impl Quote {
    pub fn new(id: &str, symbol: &str, name: &str, price: f64, change24h: f64) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change24h,
            history: vec![price],
        }
    }

    pub fn with_history(mut self, history: &[f64]) -> Self {
        self.history = history.to_vec();
        self
    }

    /// Append a price sample, trimming the oldest entries past `max_len`.
    pub fn record_price(&mut self, price: f64, max_len: usize) {
        self.history.push(price);
        if self.history.len() > max_len {
            let excess = self.history.len() - max_len;
            self.history.drain(..excess);
        }
    }

    pub fn is_gaining(&self) -> bool {
        self.change24h >= 0.0
    }
}
