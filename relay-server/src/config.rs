use std::env;

use anyhow::Context;

const APP_NAME_KEY: &str = "APP_NAME";

const SERVER_PORT_KEY: &str = "SERVER_PORT";

const CIRCL_API_URL_KEY: &str = "CIRCL_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_name: String,
    pub server_port: String,
    pub circl_api_url: String,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();

        let app_name = load_env(APP_NAME_KEY).unwrap_or("GeoIP App".to_string());

        let server_port = load_env(SERVER_PORT_KEY).unwrap_or("3000".to_string());

        let circl_api_url =
            load_env(CIRCL_API_URL_KEY).unwrap_or("https://ip.circl.lu".to_string());

        Config {
            app_name,
            server_port,
            circl_api_url,
        }
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}
