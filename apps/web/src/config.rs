use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only a malformed `PORT` is an error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub profile_image_path: PathBuf,
    pub resume_pdf_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => 8080,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            profile_image_path: lookup("PROFILE_IMAGE_PATH")
                .unwrap_or_else(|| "my_image.jpg".to_string())
                .into(),
            resume_pdf_path: lookup("RESUME_PDF_PATH")
                .unwrap_or_else(|| "My_resume.pdf".to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.profile_image_path, PathBuf::from("my_image.jpg"));
        assert_eq!(config.resume_pdf_path, PathBuf::from("My_resume.pdf"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("PROFILE_IMAGE_PATH", "/srv/me.png"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.profile_image_path, PathBuf::from("/srv/me.png"));
    }

    #[test]
    fn test_malformed_port_is_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
    }
}
