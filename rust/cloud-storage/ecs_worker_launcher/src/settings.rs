use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// The name of the environment variable which overrides where `config.json` is read from
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Process level settings, read once at cold start from environment variables.
///
/// The launcher config itself lives in [crate::config::Config] and is read on every invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The location of the launcher config file
    pub config_path: PathBuf,
}

impl Settings {
    pub fn new(config_path: Option<String>) -> Self {
        Settings {
            config_path: config_path
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(CONFIG_PATH_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_config() {
        assert_eq!(Settings::new(None).config_path, PathBuf::from("config.json"));
        assert_eq!(
            Settings::new(Some(String::new())).config_path,
            PathBuf::from("config.json")
        );
    }

    #[test]
    fn honours_override() {
        let settings = Settings::new(Some("/var/task/launcher.json".to_string()));
        assert_eq!(settings.config_path, PathBuf::from("/var/task/launcher.json"));
    }
}
