//! Shared test utilities for pomo-db unit tests.

pub(crate) mod helpers {
    use pomo_core::enums::TransitionPolicy;

    use crate::PomoDb;
    use crate::service::PomoService;

    /// Create an in-memory database with migrations applied.
    pub async fn test_db() -> PomoDb {
        PomoDb::open_local(":memory:").await.unwrap()
    }

    /// Create an in-memory service with the given policy and a 25 minute default.
    pub async fn test_service(policy: TransitionPolicy) -> PomoService<PomoDb> {
        PomoService::new(test_db().await, policy, 25)
    }
}
