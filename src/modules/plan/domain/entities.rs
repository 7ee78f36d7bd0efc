use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i32,
    pub title: String,
    /// Length of the plan in calendar months
    pub duration: i32,
    /// Monthly price
    pub price: f64,
    /// `price * duration`, rounded to cents
    pub total: f64,
}

impl Plan {
    pub fn new(id: i32, title: impl Into<String>, duration: i32, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
            price,
            total: total_price(price, duration),
        }
    }
}

pub fn total_price(price: f64, duration: i32) -> f64 {
    (price * duration as f64 * 100.0).round() / 100.0
}
