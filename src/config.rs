use crate::errors::ConfigError;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DNS_TIMEOUT_SECS: u64 = 2;

/// Which [`EmailValidator`](crate::validation::EmailValidator) the service injects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailValidationMode {
    /// RFC 5322 syntax only.
    #[default]
    Syntax,
    /// Syntax plus MX/A/AAAA lookup.
    Dns,
}

impl FromStr for EmailValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "syntax" => Ok(Self::Syntax),
            "dns" => Ok(Self::Dns),
            _ => Err(ConfigError::UnknownValidationMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

/// # Service Configuration
///
/// Read from the environment, with an optional `.env` file.
///
/// | Variable | Default |
/// |---|---|
/// | `SIGNUP_HOST` | `127.0.0.1` |
/// | `SIGNUP_PORT` | `8080` |
/// | `EMAIL_VALIDATION` | `syntax` (`syntax` or `dns`) |
/// | `DNS_TIMEOUT_SECS` | `2` |
/// | `LOG_FORMAT` | `pretty` (`pretty` or `json`) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub email_validation: EmailValidationMode,
    pub dns_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            email_validation: EmailValidationMode::default(),
            dns_timeout: Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("SIGNUP_HOST").unwrap_or(defaults.host);

        let port = match lookup("SIGNUP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let email_validation = match lookup("EMAIL_VALIDATION") {
            Some(raw) => raw.parse()?,
            None => defaults.email_validation,
        };

        let dns_timeout = match lookup("DNS_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
                match secs {
                    Some(secs) => Duration::from_secs(secs),
                    None => return Err(ConfigError::InvalidDnsTimeout(raw)),
                }
            }
            None => defaults.dns_timeout,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            email_validation,
            dns_timeout,
            log_format,
        })
    }
}
