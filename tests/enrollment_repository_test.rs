/// Enrollment repository tests against PostgreSQL
///
/// Tests cover:
/// - Joined reads and their student field sets
/// - Search by student name or plan title, paging and ordering
/// - Update and hard delete
mod utils;

use chrono::{TimeZone, Utc};
use gympoint_lib::modules::enrollment::domain::entities::{
    EnrollmentChanges, NewEnrollment, StudentFields,
};
use gympoint_lib::modules::enrollment::{EnrollmentRepository, EnrollmentRepositoryImpl};
use gympoint_lib::shared::application::PaginationParams;
use utils::{db, factories};

fn enrollment(student_id: i32, plan_id: i32, price: f64) -> NewEnrollment {
    NewEnrollment {
        student_id,
        plan_id,
        start_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap(),
        price,
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn find_details_joins_student_and_plan() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let database = db::test_database();
    let repo = EnrollmentRepositoryImpl::new(database.clone());

    let student = factories::insert_student(&database, "Anna Silva", "anna@gym.test");
    let plan = factories::insert_plan(&database, "Gold", 3, 109.0);
    let created = repo.create(enrollment(student, plan, 327.0)).await.unwrap();

    let summary = repo
        .find_details(created.id, StudentFields::Summary)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.student.name, "Anna Silva");
    assert!(summary.student.email.is_none());
    assert_eq!(summary.plan.total, 327.0);

    let with_email = repo
        .find_details(created.id, StudentFields::WithEmail)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_email.student.email.as_deref(), Some("anna@gym.test"));

    assert!(repo
        .find_details(created.id + 1, StudentFields::Summary)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn search_matches_student_name_or_plan_title() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let database = db::test_database();
    let repo = EnrollmentRepositoryImpl::new(database.clone());

    let anna = factories::insert_student(&database, "Anna Silva", "anna@gym.test");
    let bruno = factories::insert_student(&database, "Bruno Lima", "bruno@gym.test");
    let gold = factories::insert_plan(&database, "Gold", 3, 109.0);
    let start = factories::insert_plan(&database, "Start", 1, 129.0);

    repo.create(enrollment(anna, start, 129.0)).await.unwrap();
    repo.create(enrollment(bruno, gold, 327.0)).await.unwrap();
    repo.create(enrollment(bruno, start, 129.0)).await.unwrap();

    let (rows, total) = repo
        .search("anna", PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].student.name, "Anna Silva");

    let (rows, total) = repo
        .search("GOLD", PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].student.id, bruno);

    let (_, total) = repo.search("%", PaginationParams::default()).await.unwrap();
    assert_eq!(total, 0, "wildcards in the term are matched literally");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn search_pages_in_id_order() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let database = db::test_database();
    let repo = EnrollmentRepositoryImpl::new(database.clone());

    let student = factories::insert_student(&database, "Carla Mendes", "carla@gym.test");
    let plan = factories::insert_plan(&database, "Start", 1, 129.0);
    for _ in 0..7 {
        repo.create(enrollment(student, plan, 129.0)).await.unwrap();
    }

    let (first, total) = repo.search("", PaginationParams::new(1, 5)).await.unwrap();
    let (second, _) = repo.search("", PaginationParams::new(2, 5)).await.unwrap();

    assert_eq!(total, 7);
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 2);

    let ids: Vec<i32> = first
        .iter()
        .chain(second.iter())
        .map(|row| row.enrollment.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn update_and_delete() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let database = db::test_database();
    let repo = EnrollmentRepositoryImpl::new(database.clone());

    let student = factories::insert_student(&database, "Diego Rocha", "diego@gym.test");
    let start = factories::insert_plan(&database, "Start", 1, 129.0);
    let diamond = factories::insert_plan(&database, "Diamond", 6, 89.0);
    let created = repo.create(enrollment(student, start, 129.0)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            EnrollmentChanges {
                student_id: None,
                plan_id: diamond,
                start_date: created.start_date,
                end_date: Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap(),
                price: 534.0,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.plan_id, diamond);
    assert_eq!(updated.student_id, student);
    assert_eq!(updated.price, 534.0);
    assert!(updated.updated_at >= created.updated_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}
