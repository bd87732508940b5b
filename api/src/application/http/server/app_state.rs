use std::sync::Arc;

use allergyscan_core::application::AllergyScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllergyScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllergyScanService) -> Self {
        Self { args, service }
    }
}
