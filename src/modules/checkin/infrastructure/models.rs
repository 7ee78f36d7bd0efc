use crate::modules::checkin::domain::entities::Checkin;
use crate::schema::checkins;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = checkins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CheckinModel {
    pub id: i32,
    pub student_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = checkins)]
pub struct NewCheckinModel {
    pub student_id: i32,
}

impl CheckinModel {
    pub fn to_checkin(self) -> Checkin {
        Checkin {
            id: self.id,
            student_id: self.student_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
