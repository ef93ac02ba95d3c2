use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; missing SMTP credentials are reported later.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub site_url: String,
    pub enforce_canonical_host: bool,
    pub dev_hosts: Vec<String>,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub hosted_dir: PathBuf,
    pub resume: ResumeConfig,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct ResumeConfig {
    pub source: PathBuf,
    pub build_script: PathBuf,
    pub build_timeout: Duration,
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: Option<String>,
    pub to_email: Option<String>,
}

impl SmtpConfig {
    /// Names of the variables that must be set before mail can be sent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_none() {
            missing.push("SMTP_USERNAME");
        }
        if self.password.is_none() {
            missing.push("SMTP_PASSWORD");
        }
        if self.to_email.is_none() {
            missing.push("TO_EMAIL");
        }
        if self.from_email.is_none() {
            missing.push("FROM_EMAIL");
        }
        missing
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("from_email", &self.from_email)
            .field("to_email", &self.to_email)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let username = get("SMTP_USERNAME");
        let smtp = SmtpConfig {
            host: or("SMTP_HOST", "smtp.gmail.com"),
            port: parse_or(get("SMTP_PORT"), "SMTP_PORT", 587)?,
            from_email: get("FROM_EMAIL").or_else(|| username.clone()),
            username,
            password: get("SMTP_PASSWORD"),
            to_email: get("TO_EMAIL"),
        };

        let timeout_secs: u64 = parse_or(
            get("RESUME_BUILD_TIMEOUT_SECS"),
            "RESUME_BUILD_TIMEOUT_SECS",
            60,
        )?;
        if timeout_secs == 0 {
            bail!("RESUME_BUILD_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            port: parse_or(get("PORT"), "PORT", 8080)?,
            rust_log: or("RUST_LOG", "info"),
            site_url: or("SITE_URL", "https://www.davidx.tech")
                .trim_end_matches('/')
                .to_string(),
            enforce_canonical_host: parse_bool(get("ENFORCE_CANONICAL_HOST"), true)?,
            dev_hosts: or("DEV_HOSTS", "localhost,127.0.0.1,::1,0.0.0.0")
                .split(',')
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
            templates_dir: or("TEMPLATES_DIR", "templates").into(),
            static_dir: or("STATIC_DIR", "static").into(),
            hosted_dir: or("HOSTED_DIR", "hosted-projects").into(),
            resume: ResumeConfig {
                source: or("RESUME_TEX_PATH", "static/assets/resume.tex").into(),
                build_script: or("RESUME_BUILD_SCRIPT", "scripts/build-resume.sh").into(),
                build_timeout: Duration::from_secs(timeout_secs),
            },
            smtp,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn parse_bool(value: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("ENFORCE_CANONICAL_HOST must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.port, 587);
        assert!(config.enforce_canonical_host);
        assert_eq!(config.resume.source, PathBuf::from("static/assets/resume.tex"));
        assert_eq!(config.resume.build_timeout, Duration::from_secs(60));
        assert!(config.dev_hosts.contains(&"localhost".to_string()));
    }

    #[test]
    fn test_missing_smtp_credentials_do_not_fail_startup() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.smtp.missing_fields(),
            vec!["SMTP_USERNAME", "SMTP_PASSWORD", "TO_EMAIL", "FROM_EMAIL"]
        );
    }

    #[test]
    fn test_from_email_falls_back_to_username() {
        let config = config_from(&[
            ("SMTP_USERNAME", "me@example.com"),
            ("SMTP_PASSWORD", "secret"),
            ("TO_EMAIL", "inbox@example.com"),
        ])
        .unwrap();
        assert_eq!(config.smtp.from_email.as_deref(), Some("me@example.com"));
        assert!(config.smtp.missing_fields().is_empty());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = config_from(&[("PORT", ""), ("SMTP_PASSWORD", "  ")]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.smtp.password.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(config_from(&[("RESUME_BUILD_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_canonical_host_toggle_and_dev_hosts() {
        let config = config_from(&[
            ("ENFORCE_CANONICAL_HOST", "false"),
            ("DEV_HOSTS", "Localhost, staging.internal ,"),
            ("SITE_URL", "https://www.example.com/"),
        ])
        .unwrap();
        assert!(!config.enforce_canonical_host);
        assert_eq!(config.dev_hosts, vec!["localhost", "staging.internal"]);
        assert_eq!(config.site_url, "https://www.example.com");
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let config = config_from(&[("SMTP_PASSWORD", "hunter2")]).unwrap();
        let rendered = format!("{:?}", config.smtp);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
