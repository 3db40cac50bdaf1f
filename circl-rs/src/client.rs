use crate::errors::CirclError;
use crate::types::Config;
use crate::utils::send_request;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct Circl {
    pub config: Arc<Config>,
}

impl Circl {
    pub fn init(config: Option<Config>) -> Self {
        let config = Arc::new(config.unwrap_or_default());
        Self { config }
    }

    /// Looks up `ip` against the geolookup endpoint and returns the raw
    /// JSON body. The response is a list of loosely-typed entries; callers
    /// decide what to pull out of it.
    pub async fn geolookup(&self, ip: &str) -> Result<Value, CirclError> {
        send_request(&self.config, &format!("/geolookup/{}", ip)).await
    }
}
