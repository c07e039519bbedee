use std::sync::Arc;

use pomo_db::PomoService;

/// Shared state for the route handlers.
pub(crate) struct ApiState<S> {
    pub(crate) service: Arc<PomoService<S>>,
    pub(crate) default_limit: u32,
}

// Manual Clone: avoid derive adding an `S: Clone` bound.
impl<S> Clone for ApiState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            default_limit: self.default_limit,
        }
    }
}
