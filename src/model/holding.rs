/// One portfolio row on the Dashboard page.
///
/// `value` and `price` are frozen at seed time and intentionally not
/// reconciled with live quote updates from the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub value: f64,
    pub price: f64,
    pub change24h: f64,
}

impl Holding {
    pub fn new(
        asset_id: &str,
        symbol: &str,
        name: &str,
        amount: f64,
        value: f64,
        price: f64,
        change24h: f64,
    ) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            amount,
            value,
            price,
            change24h,
        }
    }
}

/// Sum of the frozen row values, in quote currency.
pub fn portfolio_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.value).sum()
}
