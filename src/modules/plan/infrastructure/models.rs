/// Diesel models for the plans table
use crate::modules::plan::domain::entities::Plan;
use crate::schema::plans;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = plans)]
pub struct PlanModel {
    pub id: i32,
    pub title: String,
    pub duration: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanModel {
    pub fn to_plan(self) -> Plan {
        Plan::new(self.id, self.title, self.duration, self.price)
    }
}
