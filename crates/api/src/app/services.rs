//! Service wiring shared across handlers.

use std::sync::Arc;

use recipeshare_users::{UserDirectory, UserLookup};

/// Application services, one instance per process, shared via `Extension`.
pub struct AppServices {
    users: UserLookup<Arc<dyn UserDirectory>>,
}

pub fn build_services(directory: Arc<dyn UserDirectory>) -> AppServices {
    AppServices {
        users: UserLookup::new(directory),
    }
}

impl AppServices {
    pub fn users(&self) -> &UserLookup<Arc<dyn UserDirectory>> {
        &self.users
    }
}
