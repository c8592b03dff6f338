use crate::commands::{CmdMessage, CmdResult};
use crate::config::RollbookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RollbookConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            return Ok(result.with_config(config));
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key,
                value.unwrap_or_else(|| "(unset)".to_string())
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("Set {} = {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_persists() {
        let dir = tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("default_class".into(), "2024级1班".into()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowKey("default_class".into())).unwrap();
        assert_eq!(shown.messages[0].content, "default_class = 2024级1班");
    }

    #[test]
    fn test_show_unset_key() {
        let dir = tempdir().unwrap();
        let shown = run(dir.path(), ConfigAction::ShowKey("default_class".into())).unwrap();
        assert_eq!(shown.messages[0].content, "default_class = (unset)");
    }

    #[test]
    fn test_show_all_returns_config() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(RollbookConfig::default()));
    }

    #[test]
    fn test_set_unknown_key_fails_without_writing() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("bogus".into(), "1".into())).is_err());
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }
}
