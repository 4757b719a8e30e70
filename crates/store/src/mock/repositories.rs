use async_trait::async_trait;
use coursesched_core::errors::ScheduleResult;
use coursesched_core::models::student::StudentRecord;
use mockall::mock;

use crate::repositories::StudentRepository;

// Mock repositories for testing
mock! {
    pub StudentRepo {}

    #[async_trait]
    impl StudentRepository for StudentRepo {
        async fn load(&self, student_id: &str) -> ScheduleResult<StudentRecord>;

        async fn save(&self, record: &StudentRecord) -> ScheduleResult<()>;

        async fn list_students(&self) -> ScheduleResult<Vec<String>>;
    }
}
