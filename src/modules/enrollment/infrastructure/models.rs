/// Diesel models for the enrollments table
use crate::modules::enrollment::domain::entities::{
    Enrollment, EnrollmentChanges, EnrollmentDetails, NewEnrollment, StudentFields,
    StudentSummary,
};
use crate::modules::plan::infrastructure::models::PlanModel;
use crate::modules::student::infrastructure::models::StudentModel;
use crate::schema::enrollments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = enrollments)]
pub struct EnrollmentModel {
    pub id: i32,
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new enrollments
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = enrollments)]
pub struct NewEnrollmentModel {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

// For updating existing enrollments (a None student_id leaves the column untouched)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = enrollments)]
pub struct EnrollmentChangeset {
    pub student_id: Option<i32>,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the enrollment, student and plan join
pub type EnrollmentRow = (EnrollmentModel, StudentModel, PlanModel);

impl EnrollmentModel {
    pub fn to_enrollment(self) -> Enrollment {
        Enrollment {
            id: self.id,
            student_id: self.student_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<NewEnrollment> for NewEnrollmentModel {
    fn from(enrollment: NewEnrollment) -> Self {
        Self {
            student_id: enrollment.student_id,
            plan_id: enrollment.plan_id,
            start_date: enrollment.start_date,
            end_date: enrollment.end_date,
            price: enrollment.price,
        }
    }
}

impl From<EnrollmentChanges> for EnrollmentChangeset {
    fn from(changes: EnrollmentChanges) -> Self {
        Self {
            student_id: changes.student_id,
            plan_id: changes.plan_id,
            start_date: changes.start_date,
            end_date: changes.end_date,
            price: changes.price,
            updated_at: Utc::now(),
        }
    }
}

pub fn to_details(row: EnrollmentRow, student_fields: StudentFields) -> EnrollmentDetails {
    let (enrollment, student, plan) = row;
    let email = match student_fields {
        StudentFields::Summary => None,
        StudentFields::WithEmail => Some(student.email),
    };

    EnrollmentDetails {
        enrollment: enrollment.to_enrollment(),
        student: StudentSummary {
            id: student.id,
            name: student.name,
            email,
        },
        plan: plan.to_plan(),
    }
}
