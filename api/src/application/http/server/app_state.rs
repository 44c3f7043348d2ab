use std::sync::Arc;

use foodswap_core::application::FoodswapService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodswapService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodswapService) -> Self {
        Self { args, service }
    }
}
