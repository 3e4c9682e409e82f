/// A cloud-mining offer shown on the Mining page. Marketing copy only,
/// nothing here is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningPlan {
    pub period_days: u32,
    pub yield_percent: f64,
    pub min_deposit_usd: f64,
}

impl MiningPlan {
    pub fn new(period_days: u32, yield_percent: f64, min_deposit_usd: f64) -> Self {
        Self {
            period_days,
            yield_percent,
            min_deposit_usd,
        }
    }

    pub fn period_label(&self) -> String {
        if self.period_days == 1 {
            "1 Day".to_string()
        } else {
            format!("{} Days", self.period_days)
        }
    }
}
