use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::AppConfig;

const CONFIG_DIR: &str = "barbearia";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the user configuration, falling back to defaults when there is none.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> color_eyre::Result<AppConfig> {
    let Some(path) = config_path() else {
        debug!("No config directory found, using defaults");
        return Ok(AppConfig::default());
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> color_eyre::Result<AppConfig> {
    if !path.exists() {
        debug!("Config file not found at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    debug!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn save(config: &AppConfig) -> color_eyre::Result<()> {
    let Some(dir) = config_dir() else {
        warn!("Could not determine config directory");
        return Ok(());
    };
    save_to(&dir.join(CONFIG_FILE), config)
}

pub fn save_to(path: &Path, config: &AppConfig) -> color_eyre::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    debug!("Saved config to {:?}", path);
    Ok(())
}

pub fn save_theme(theme_name: &str) -> color_eyre::Result<()> {
    let mut config = load().unwrap_or_default();
    config.theme.name = theme_name.to_string();
    save(&config)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.theme.name, "Catppuccin Mocha");
    }

    #[test]
    fn test_partial_keybindings_keep_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [theme]
            name = "Catppuccin Latte"

            [keybindings.schedule]
            confirm = "ctrl+s"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.name, "Catppuccin Latte");
        let kb = &config.keybindings;
        assert!(kb.schedule.confirm.matches(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(kb.schedule.pick_date.matches(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(kb.global.quit.matches(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.theme.name = "Catppuccin Frappé".to_string();

        save_to(&path, &config).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.theme.name, "Catppuccin Frappé");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[theme\nname = ").unwrap();

        assert!(load_from(&path).is_err());
    }
}
