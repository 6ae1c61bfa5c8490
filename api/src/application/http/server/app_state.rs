use std::sync::Arc;

use kondate_core::application::KondateService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: KondateService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: KondateService) -> Self {
        Self { args, service }
    }
}
