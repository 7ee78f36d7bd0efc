/// Database test utilities with singleton pattern
///
/// Every test shares one migrated pool; tests that touch rows take the lock
/// and truncate first.
use diesel::prelude::*;
use gympoint_lib::shared::config::DatabaseConfig;
use gympoint_lib::shared::Database;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static DATABASE: OnceLock<Arc<Database>> = OnceLock::new();
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Get or create the singleton database for tests
pub fn test_database() -> Arc<Database> {
    Arc::clone(DATABASE.get_or_init(|| {
        dotenvy::dotenv().ok();
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let database = Database::new(&DatabaseConfig {
            url,
            max_pool_size: 8,
        })
        .expect("Failed to create test database pool");
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Arc::new(database)
    }))
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db() {
    let database = test_database();
    let mut conn = database.get_connection().expect("Failed to get DB connection");

    diesel::sql_query(
        "TRUNCATE TABLE background_jobs, checkins, enrollments, plans, students \
         RESTART IDENTITY CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to clean test tables");
}

/// Acquire test lock to ensure tests run serially
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
