/// Test data factories
///
/// Students and plans are seeded with plain SQL; the crate never writes them.
use diesel::prelude::*;
use diesel::sql_types::{Float8, Int4, Text, Timestamptz};
use gympoint_lib::shared::Database;

#[derive(QueryableByName)]
struct InsertedId {
    #[diesel(sql_type = Int4)]
    id: i32,
}

pub fn insert_student(db: &Database, name: &str, email: &str) -> i32 {
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
        .bind::<Text, _>(name)
        .bind::<Text, _>(email)
        .get_result::<InsertedId>(&mut conn)
        .expect("Failed to insert student")
        .id
}

pub fn insert_plan(db: &Database, title: &str, duration: i32, price: f64) -> i32 {
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query(
        "INSERT INTO plans (title, duration, price) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind::<Text, _>(title)
    .bind::<Int4, _>(duration)
    .bind::<Float8, _>(price)
    .get_result::<InsertedId>(&mut conn)
    .expect("Failed to insert plan")
    .id
}

/// Insert a check-in with an explicit timestamp
pub fn insert_checkin_at(db: &Database, student_id: i32, at: chrono::DateTime<chrono::Utc>) {
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query(
        "INSERT INTO checkins (student_id, created_at, updated_at) VALUES ($1, $2, $2)",
    )
    .bind::<Int4, _>(student_id)
    .bind::<Timestamptz, _>(at)
    .execute(&mut conn)
    .expect("Failed to insert checkin");
}
