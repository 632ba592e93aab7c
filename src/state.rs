use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::LinkRepository;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services over the given link store.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: &str, jwt_secret: &str) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, base_url)),
            auth_service: Arc::new(AuthService::new(jwt_secret)),
        }
    }
}
