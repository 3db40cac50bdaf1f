use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://ip.circl.lu".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_circl() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://ip.circl.lu");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
