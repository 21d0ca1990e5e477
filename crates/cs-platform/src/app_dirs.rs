use std::path::PathBuf;

const APP_DIR_NAME: &str = "clipstack";
const PROFILE_ENV: &str = "CLIPSTACK_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppDirsError {
    #[error("system config directory is unavailable")]
    ConfigDirUnavailable,

    #[error("system local data directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Directories the application reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_root: PathBuf,
    pub data_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.config_root.join("config.toml")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }
}

/// Resolves [`AppDirs`] through the `dirs` crate.
///
/// Setting `CLIPSTACK_PROFILE` isolates a second instance under
/// `clipstack-<profile>`.
pub struct DirsAppDirs {
    base_override: Option<PathBuf>,
}

impl DirsAppDirs {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Resolve every directory under `base` instead of the system locations.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    pub fn resolve(&self) -> Result<AppDirs, AppDirsError> {
        let (base_config, base_data) = match &self.base_override {
            Some(base) => (base.clone(), base.clone()),
            None => (
                dirs::config_dir().ok_or(AppDirsError::ConfigDirUnavailable)?,
                dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?,
            ),
        };
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            config_root: base_config.join(&app_dir_name),
            data_root: base_data.join(&app_dir_name),
        })
    }
}

impl Default for DirsAppDirs {
    fn default() -> Self {
        Self::new()
    }
}
