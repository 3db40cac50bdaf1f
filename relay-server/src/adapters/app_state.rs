use std::sync::Arc;

use circl_rs::Circl;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub circl: Arc<Circl>,
}
