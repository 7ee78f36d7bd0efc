use crate::log_info;
use crate::modules::enrollment::application::dispatcher::NotificationDispatcher;
use crate::modules::enrollment::domain::computator::EnrollmentPeriod;
use crate::modules::enrollment::domain::entities::{
    Enrollment, EnrollmentChanges, EnrollmentDetails, NewEnrollment, StudentFields,
};
use crate::modules::enrollment::domain::errors::EnrollmentError;
use crate::modules::enrollment::domain::repository::EnrollmentRepository;
use crate::modules::plan::domain::{entities::Plan, repository::PlanRepository};
use crate::modules::student::domain::repository::StudentRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::utils::Validator;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateEnrollment {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: String,
}

#[derive(Debug, Clone)]
pub struct UpdateEnrollment {
    pub plan_id: i32,
    pub start_date: String,
    pub student_id: Option<i32>,
}

pub struct EnrollmentService {
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    plan_repo: Arc<dyn PlanRepository>,
    student_repo: Arc<dyn StudentRepository>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl EnrollmentService {
    pub fn new(
        enrollment_repo: Arc<dyn EnrollmentRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        student_repo: Arc<dyn StudentRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            enrollment_repo,
            plan_repo,
            student_repo,
            dispatcher,
        }
    }

    /// Page through enrollments whose student name or plan title contains `term`
    pub async fn list(
        &self,
        term: &str,
        params: PaginationParams,
    ) -> Result<PaginatedResult<EnrollmentDetails>, EnrollmentError> {
        let (rows, total) = self.enrollment_repo.search(term, params).await?;
        Ok(PaginatedResult::new(rows, total, &params))
    }

    pub async fn show(&self, id: i32) -> Result<EnrollmentDetails, EnrollmentError> {
        self.enrollment_repo
            .find_details(id, StudentFields::Summary)
            .await?
            .ok_or(EnrollmentError::NotFound)
    }

    /// Store a new enrollment priced and dated from its plan, then queue the
    /// confirmation mail.
    pub async fn create(
        &self,
        request: CreateEnrollment,
    ) -> Result<EnrollmentDetails, EnrollmentError> {
        let plan = self.require_plan(request.plan_id).await?;
        self.require_student(request.student_id).await?;

        let period = EnrollmentPeriod::compute(&request.start_date, plan.duration)?;

        let created = self
            .enrollment_repo
            .create(NewEnrollment {
                student_id: request.student_id,
                plan_id: plan.id,
                start_date: period.start_date,
                end_date: period.end_date,
                price: plan.total,
            })
            .await?;

        let details = self
            .enrollment_repo
            .find_details(created.id, StudentFields::WithEmail)
            .await?
            .ok_or(EnrollmentError::NotFound)?;

        log_info!(
            "Enrollment {} created for student {} on plan '{}'",
            created.id,
            created.student_id,
            plan.title
        );

        self.dispatcher.dispatch(&details).await;

        Ok(details)
    }

    /// Re-derive end date and price from the (possibly new) plan.
    pub async fn update(
        &self,
        id: i32,
        request: UpdateEnrollment,
    ) -> Result<Enrollment, EnrollmentError> {
        if self.enrollment_repo.find_by_id(id).await?.is_none() {
            return Err(EnrollmentError::NotFound);
        }

        let plan = self.require_plan(request.plan_id).await?;
        if let Some(student_id) = request.student_id {
            self.require_student(student_id).await?;
        }

        let period = EnrollmentPeriod::compute(&request.start_date, plan.duration)?;

        self.enrollment_repo
            .update(
                id,
                EnrollmentChanges {
                    student_id: request.student_id,
                    plan_id: plan.id,
                    start_date: period.start_date,
                    end_date: period.end_date,
                    price: plan.total,
                },
            )
            .await?
            .ok_or(EnrollmentError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), EnrollmentError> {
        if self.enrollment_repo.delete(id).await? {
            log_info!("Enrollment {} deleted", id);
            Ok(())
        } else {
            Err(EnrollmentError::NotFound)
        }
    }

    async fn require_plan(&self, plan_id: i32) -> Result<Plan, EnrollmentError> {
        Validator::validate_id(plan_id, "Plan")?;
        self.plan_repo
            .find_by_id(plan_id)
            .await?
            .ok_or(EnrollmentError::PlanNotFound)
    }

    async fn require_student(&self, student_id: i32) -> Result<(), EnrollmentError> {
        Validator::validate_id(student_id, "Student")?;
        match self.student_repo.find_by_id(student_id).await? {
            Some(_) => Ok(()),
            None => Err(EnrollmentError::StudentNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::enrollment::domain::entities::StudentSummary;
    use crate::modules::enrollment::domain::repository::MockEnrollmentRepository;
    use crate::modules::jobs::domain::repository::MockTaskQueue;
    use crate::modules::plan::domain::repository::MockPlanRepository;
    use crate::modules::student::domain::entities::Student;
    use crate::modules::student::domain::repository::MockStudentRepository;
    use crate::shared::errors::AppError;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::eq;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn stored(new: &NewEnrollment, id: i32) -> Enrollment {
        Enrollment {
            id,
            student_id: new.student_id,
            plan_id: new.plan_id,
            start_date: new.start_date,
            end_date: new.end_date,
            price: new.price,
            created_at: new.start_date,
            updated_at: new.start_date,
        }
    }

    fn plans() -> MockPlanRepository {
        let mut repo = MockPlanRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(match id {
                1 => Some(Plan::new(1, "Start", 1, 129.0)),
                2 => Some(Plan::new(2, "Gold", 3, 109.0)),
                3 => Some(Plan::new(3, "Diamond", 6, 89.0)),
                _ => None,
            })
        });
        repo
    }

    fn students() -> MockStudentRepository {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok((id == 7).then(|| Student {
                id: 7,
                name: "Anna Silva".to_string(),
                email: "anna@gym.test".to_string(),
            }))
        });
        repo
    }

    fn silent_queue() -> MockTaskQueue {
        let mut queue = MockTaskQueue::new();
        queue
            .expect_enqueue()
            .returning(|_, _| Err(AppError::QueueError("not under test".to_string())));
        queue
    }

    fn service(
        enrollments: MockEnrollmentRepository,
        queue: MockTaskQueue,
    ) -> EnrollmentService {
        EnrollmentService::new(
            Arc::new(enrollments),
            Arc::new(plans()),
            Arc::new(students()),
            Arc::new(NotificationDispatcher::new(Arc::new(queue))),
        )
    }

    fn create_request(plan_id: i32, start_date: &str) -> CreateEnrollment {
        CreateEnrollment {
            student_id: 7,
            plan_id,
            start_date: start_date.to_string(),
        }
    }

    #[tokio::test]
    async fn create_with_unknown_plan_never_persists() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_create().never();

        let mut queue = MockTaskQueue::new();
        queue.expect_enqueue().never();

        let err = service(enrollments, queue)
            .create(create_request(99, "2024-01-15"))
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::PlanNotFound));
    }

    #[tokio::test]
    async fn create_with_unknown_student_never_persists() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_create().never();

        let err = service(enrollments, silent_queue())
            .create(CreateEnrollment {
                student_id: 8,
                ..create_request(1, "2024-01-15")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::StudentNotFound));
    }

    #[tokio::test]
    async fn create_with_bad_date_never_persists() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_create().never();

        let err = service(enrollments, silent_queue())
            .create(create_request(1, "next monday"))
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn create_prices_and_dates_from_plan_then_notifies() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_create()
            .withf(|new| {
                new.price == 327.0
                    && new.plan_id == 2
                    && new.start_date == at(2024, 1, 31)
                    && new.end_date == at(2024, 4, 30)
            })
            .times(1)
            .returning(|new| Ok(stored(&new, 40)));
        enrollments
            .expect_find_details()
            .with(eq(40), eq(StudentFields::WithEmail))
            .times(1)
            .returning(|id, _| {
                let start = at(2024, 1, 31);
                Ok(Some(EnrollmentDetails {
                    enrollment: Enrollment {
                        id,
                        student_id: 7,
                        plan_id: 2,
                        start_date: start,
                        end_date: at(2024, 4, 30),
                        price: 327.0,
                        created_at: start,
                        updated_at: start,
                    },
                    student: StudentSummary {
                        id: 7,
                        name: "Anna Silva".to_string(),
                        email: Some("anna@gym.test".to_string()),
                    },
                    plan: Plan::new(2, "Gold", 3, 109.0),
                }))
            });

        let mut queue = MockTaskQueue::new();
        queue
            .expect_enqueue()
            .withf(|key, payload| key == "EnrollmentMail" && payload["enrollment"]["id"] == 40)
            .times(1)
            .returning(|_, _| Err(AppError::QueueError("offline".to_string())));

        let details = service(enrollments, queue)
            .create(create_request(2, "2024-01-31"))
            .await
            .unwrap();

        assert_eq!(details.enrollment.id, 40);
        assert_eq!(details.enrollment.price, details.plan.total);
        assert_eq!(details.student.email.as_deref(), Some("anna@gym.test"));
    }

    #[tokio::test]
    async fn show_missing_enrollment_is_not_found() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_details()
            .with(eq(5), eq(StudentFields::Summary))
            .returning(|_, _| Ok(None));

        let err = service(enrollments, silent_queue())
            .show(5)
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::NotFound));
    }

    #[tokio::test]
    async fn update_recomputes_from_new_plan() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_find_by_id().with(eq(3)).returning(|id| {
            let start = at(2024, 1, 10);
            Ok(Some(Enrollment {
                id,
                student_id: 7,
                plan_id: 1,
                start_date: start,
                end_date: at(2024, 2, 10),
                price: 129.0,
                created_at: start,
                updated_at: start,
            }))
        });
        enrollments
            .expect_update()
            .withf(|id, changes| {
                *id == 3
                    && changes.plan_id == 3
                    && changes.student_id.is_none()
                    && changes.price == 534.0
                    && changes.end_date == at(2024, 8, 10)
            })
            .times(1)
            .returning(|id, changes| {
                Ok(Some(Enrollment {
                    id,
                    student_id: 7,
                    plan_id: changes.plan_id,
                    start_date: changes.start_date,
                    end_date: changes.end_date,
                    price: changes.price,
                    created_at: at(2024, 1, 10),
                    updated_at: Utc::now(),
                }))
            });

        let updated = service(enrollments, silent_queue())
            .update(
                3,
                UpdateEnrollment {
                    plan_id: 3,
                    start_date: "2024-02-10".to_string(),
                    student_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.plan_id, 3);
        assert_eq!(updated.price, 534.0);
        assert_eq!(updated.end_date, at(2024, 8, 10));
    }

    #[tokio::test]
    async fn update_missing_enrollment_skips_write() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_find_by_id().returning(|_| Ok(None));
        enrollments.expect_update().never();

        let err = service(enrollments, silent_queue())
            .update(
                11,
                UpdateEnrollment {
                    plan_id: 1,
                    start_date: "2024-02-10".to_string(),
                    student_id: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_enrollment_is_not_found() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_delete()
            .with(eq(404))
            .times(1)
            .returning(|_| Ok(false));

        let err = service(enrollments, silent_queue())
            .delete(404)
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::NotFound));
    }

    #[tokio::test]
    async fn list_wraps_rows_in_page_envelope() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_search()
            .withf(|term, params| term == "anna" && params.page == 2 && params.per_page == 5)
            .returning(|_, _| Ok((Vec::new(), 11)));

        let page = service(enrollments, silent_queue())
            .list("anna", PaginationParams::new(2, 5))
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_page, 3);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn storage_failures_surface_as_store_errors() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_delete()
            .returning(|_| Err(AppError::DatabaseError("connection reset".to_string())));

        let err = service(enrollments, silent_queue())
            .delete(1)
            .await
            .unwrap_err();

        assert!(matches!(err, EnrollmentError::Store(AppError::DatabaseError(_))));
    }
}
