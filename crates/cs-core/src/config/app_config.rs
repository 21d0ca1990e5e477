use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_RESTORE_DELAY_MS: u64 = 800;
pub const DEFAULT_RESTORE_SETTLE_MS: u64 = 500;
const DEFAULT_SHORTCUT_MODIFIERS: &str = "cmd+shift";

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clipboard change-token polling period
    pub poll_interval_ms: u64,

    /// Wait between the synthetic paste and writing the saved clipboard back
    /// 模拟粘贴之后、恢复剪贴板之前的等待时间
    pub restore_delay_ms: u64,

    /// Wait after the restore write before change detection resumes
    pub restore_settle_ms: u64,

    /// Raw modifier list shared by all paste slots, e.g. `"cmd+shift"`
    pub shortcut_modifiers: String,

    /// Mirror logs into a daily rolling file
    pub log_to_file: bool,

    /// Log directory (empty means the platform default)
    /// 日志目录（为空表示使用平台默认目录）
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            restore_delay_ms: DEFAULT_RESTORE_DELAY_MS,
            restore_settle_ms: DEFAULT_RESTORE_SETTLE_MS,
            shortcut_modifiers: DEFAULT_SHORTCUT_MODIFIERS.to_string(),
            log_to_file: false,
            log_dir: PathBuf::new(),
        }
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys fall back to [`AppConfig::default`]. Present keys are not
    /// validated; negative integers are read as zero.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let millis = |section: &str, key: &str, fallback: u64| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(fallback)
        };

        Ok(Self {
            poll_interval_ms: millis("timing", "poll_interval_ms", defaults.poll_interval_ms),
            restore_delay_ms: millis("timing", "restore_delay_ms", defaults.restore_delay_ms),
            restore_settle_ms: millis("timing", "restore_settle_ms", defaults.restore_settle_ms),
            shortcut_modifiers: toml_value
                .get("shortcuts")
                .and_then(|s| s.get("modifiers"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(defaults.shortcut_modifiers),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.log_to_file),
            log_dir: toml_value
                .get("logging")
                .and_then(|l| l.get("dir"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }

    pub fn restore_settle(&self) -> Duration {
        Duration::from_millis(self.restore_settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_uses_defaults_for_empty_document() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.restore_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [timing]
            poll_interval_ms = 250
            restore_delay_ms = 1200
            restore_settle_ms = 300

            [shortcuts]
            modifiers = "ctrl+alt"

            [logging]
            file = true
            dir = "/tmp/clipstack-logs"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.restore_delay_ms, 1200);
        assert_eq!(config.restore_settle_ms, 300);
        assert_eq!(config.shortcut_modifiers, "ctrl+alt");
        assert!(config.log_to_file);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/clipstack-logs"));
    }

    #[test]
    fn test_from_toml_does_not_validate_modifiers() {
        let toml_str = r#"
            [shortcuts]
            modifiers = "hyper"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Parsing happens at the shortcut layer
        assert_eq!(config.shortcut_modifiers, "hyper");
    }

    #[test]
    fn test_from_toml_clamps_negative_timings_to_zero() {
        let toml_str = r#"
            [timing]
            restore_settle_ms = -5
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.restore_settle_ms, 0);
    }
}
