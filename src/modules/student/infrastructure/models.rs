use crate::modules::student::domain::entities::Student;
use crate::schema::students;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = students)]
pub struct StudentModel {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentModel {
    pub fn to_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}
