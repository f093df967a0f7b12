use crate::config::SiteConfig;
use crate::model::RunReport;
use std::path::PathBuf;

pub mod config;
pub mod images;
pub mod patching;
pub mod sitemap;
pub mod venues;

/// Filesystem anchors for one invocation: the site root being
/// maintained and the directory the config lives in.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

impl SitePaths {
    pub fn new(root: PathBuf) -> Self {
        let config_dir = root.join(".shipshape");
        Self { root, config_dir }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Name + description of one catalog entry, for `shipshape patches`.
#[derive(Debug, Clone)]
pub struct PatchInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub report: Option<RunReport>,
    pub patches: Vec<PatchInfo>,
    pub config: Option<SiteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report(mut self, report: RunReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_patches(mut self, patches: Vec<PatchInfo>) -> Self {
        self.patches = patches;
        self
    }

    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }
}
