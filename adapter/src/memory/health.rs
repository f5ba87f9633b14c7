use async_trait::async_trait;
use kernel::repository::health::HealthCheckRepository;

/// The transient backing has no external dependency to probe.
pub struct InMemoryHealthCheckRepository;

#[async_trait]
impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn check_db(&self) -> bool {
        true
    }
}
