use crate::commands::{CmdMessage, CmdResult, SitePaths};
use crate::config::SiteConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SitePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SiteConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in SiteConfig::known_keys() {
                if let Some(value) = config.get_key(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match config.get_key(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => result.add_message(CmdMessage::warning(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            config.set_key(&key, &value)?;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
