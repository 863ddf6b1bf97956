//! Shared application state for all routes.

use crate::config::UnlinkPolicy;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub unlink_policy: UnlinkPolicy,
}
