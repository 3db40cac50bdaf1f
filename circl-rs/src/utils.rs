use crate::errors::CirclError;
use crate::types::Config;
use reqwest::Client;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(config)))]
pub async fn send_request(config: &Config, endpoint: &str) -> Result<Value, CirclError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), endpoint);
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending request to CIRCL");

    let res = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = res.status();
    if status.is_success() {
        let body = res.json::<Value>().await?;
        #[cfg(feature = "tracing")]
        info!(status = ?status, "CIRCL request successful");
        Ok(body)
    } else {
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        #[cfg(feature = "tracing")]
        error!(status = ?status, body = %body, "CIRCL API returned error");
        Err(CirclError::ApiError { status, body })
    }
}
