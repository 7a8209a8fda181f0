use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct TravelDocConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub storage: StorageConfig,
    pub limits: LimitsConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory generated images are written to.
    pub images_dir: String,
    /// URL prefix the images directory is served under.
    pub public_path: String,
    pub delivery: ImageDelivery,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageDelivery {
    /// Write a PNG file and return its public URL.
    File,
    /// Return a base64 data URI and write nothing.
    Inline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub rate_limit_per_minute: u32,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl LimitsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub cache_ttl_secs: u64,
}

impl WeatherConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl TravelDocConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TravelDocConfig {
            common: common_config,
            storage: StorageConfig {
                images_dir: get_env("IMAGES_DIR", Some("static/images"), is_prod)?,
                public_path: get_env("IMAGES_PUBLIC_PATH", Some("/static/images"), is_prod)?,
                delivery: get_env("IMAGE_DELIVERY", Some("file"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            },
            limits: LimitsConfig {
                rate_limit_per_minute: parse_env("RATE_LIMIT_PER_MINUTE", "600", is_prod)?,
                request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "10", is_prod)?,
                max_body_bytes: parse_env("MAX_BODY_BYTES", "65536", is_prod)?,
            },
            weather: WeatherConfig {
                cache_ttl_secs: parse_env("WEATHER_CACHE_TTL_SECS", "300", is_prod)?,
            },
        })
    }
}

impl std::str::FromStr for ImageDelivery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(ImageDelivery::File),
            "inline" => Ok(ImageDelivery::Inline),
            _ => Err(format!("Invalid image delivery mode: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_env<T>(key: &str, default: &str, is_prod: bool) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(key, Some(default), is_prod)?;
    raw.trim()
        .parse()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("{} has invalid value {:?}: {}", key, raw, e)))
}
