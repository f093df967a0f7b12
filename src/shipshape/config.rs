use crate::error::{Result, ShipshapeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for shipshape, stored in .shipshape/config.json under
/// the site root. Everything here used to be module-level globals in the
/// old scripts; keeping it in one loadable object is what lets the test
/// suite run against a temp directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Path fragments excluded from every batch run
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,

    /// Canonical site origin used for sitemap <loc> entries
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Venues database path, relative to the site root
    #[serde(default = "default_venues_db")]
    pub venues_db: String,

    /// External image conversion program
    #[serde(default = "default_image_tool")]
    pub image_tool: String,

    /// Arguments for the conversion program; `{in}` and `{out}` are
    /// substituted per file
    #[serde(default = "default_image_args")]
    pub image_args: Vec<String>,

    /// Per-file timeout for the conversion program, in seconds
    #[serde(default = "default_image_timeout_secs")]
    pub image_timeout_secs: u64,

    /// Cap on the changed-file sample printed after a batch run
    #[serde(default = "default_report_sample")]
    pub report_sample: usize,
}

fn default_excluded() -> Vec<String> {
    [
        "/vendors/",
        "/admin/",
        "/node_modules/",
        "/.git/",
        "/.shipshape/",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_base_url() -> String {
    "https://www.wakeandwave.com".to_string()
}

fn default_venues_db() -> String {
    "data/venues.json".to_string()
}

fn default_image_tool() -> String {
    "cwebp".to_string()
}

fn default_image_args() -> Vec<String> {
    ["-q", "82", "{in}", "-o", "{out}"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_image_timeout_secs() -> u64 {
    30
}

fn default_report_sample() -> usize {
    20
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
            base_url: default_base_url(),
            venues_db: default_venues_db(),
            image_tool: default_image_tool(),
            image_args: default_image_args(),
            image_timeout_secs: default_image_timeout_secs(),
            report_sample: default_report_sample(),
        }
    }
}

impl SiteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShipshapeError::Io)?;
        let config: SiteConfig =
            serde_json::from_str(&content).map_err(ShipshapeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShipshapeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShipshapeError::Serialization)?;
        fs::write(config_path, content).map_err(ShipshapeError::Io)?;
        Ok(())
    }

    pub fn get_key(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "venues-db" => Some(self.venues_db.clone()),
            "image-tool" => Some(self.image_tool.clone()),
            "image-timeout" => Some(self.image_timeout_secs.to_string()),
            "report-sample" => Some(self.report_sample.to_string()),
            "excluded" => Some(self.excluded.join(",")),
            _ => None,
        }
    }

    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base-url" => self.base_url = value.trim_end_matches('/').to_string(),
            "venues-db" => self.venues_db = value.to_string(),
            "image-tool" => self.image_tool = value.to_string(),
            "image-timeout" => {
                self.image_timeout_secs = value
                    .parse()
                    .map_err(|_| ShipshapeError::Api(format!("Not a number: {}", value)))?
            }
            "report-sample" => {
                self.report_sample = value
                    .parse()
                    .map_err(|_| ShipshapeError::Api(format!("Not a number: {}", value)))?
            }
            "excluded" => {
                self.excluded = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            _ => return Err(ShipshapeError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn known_keys() -> &'static [&'static str] {
        &[
            "base-url",
            "venues-db",
            "image-tool",
            "image-timeout",
            "report-sample",
            "excluded",
        ]
    }
}
