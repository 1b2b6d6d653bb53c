use std::sync::Arc;

use fridgely_core::application::FridgelyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FridgelyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FridgelyService) -> Self {
        Self { args, service }
    }
}
