//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, ProfileService};
use crate::domain::persist_worker::PersistSender;
use crate::domain::repositories::{AnalyticsSource, ImageStorage, ProfileRepository};

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService<dyn ImageStorage>>,
    pub analytics_service: Arc<AnalyticsService<dyn AnalyticsSource>>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub persist_sender: PersistSender,
}

impl AppState {
    pub fn new(
        profile_service: Arc<ProfileService<dyn ImageStorage>>,
        analytics_service: Arc<AnalyticsService<dyn AnalyticsSource>>,
        profile_repository: Arc<dyn ProfileRepository>,
        image_storage: Arc<dyn ImageStorage>,
        persist_sender: PersistSender,
    ) -> Self {
        Self {
            profile_service,
            analytics_service,
            profile_repository,
            image_storage,
            persist_sender,
        }
    }
}
