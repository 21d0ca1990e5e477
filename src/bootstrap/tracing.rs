//! Tracing configuration for ClipStack
//!
//! ## Behavior / 行为
//!
//! - **Environment filter**: respects `RUST_LOG`, otherwise debug in debug
//!   builds and info in release builds
//! - **stderr**: always on, UTC timestamps with file and line; stdout is
//!   left to shell output
//! - **File**: optional non-blocking daily rolling `clipstack.log`

use std::path::Path;
use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("cs_app={level}"),
        format!("cs_platform={level}"),
        "enigo=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// `log_dir` enables the file layer. A file layer that cannot be created is
/// reported on stderr and skipped; stderr logging still comes up.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = log_dir.and_then(|dir| match build_file_writer(dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
            None
        }
    });

    // "2025-01-15 10:30:45.123 INFO src/file.rs:42 target: message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "clipstack.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"cs_platform=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"cs_app=info".to_string()));
        assert!(prod_directives.contains(&"enigo=warn".to_string()));
    }

    #[test]
    fn test_console_logs_go_to_stderr() {
        const CHILD_ENV: &str = "CLIPSTACK_TRACING_CHILD";
        const MESSAGE: &str = "console sink check";

        if std::env::var_os(CHILD_ENV).is_some() {
            init_tracing_subscriber(None).unwrap();
            tracing::info!("{MESSAGE}");
            return;
        }

        let output = std::process::Command::new(std::env::current_exe().unwrap())
            .args([
                "--exact",
                "bootstrap::tracing::tests::test_console_logs_go_to_stderr",
                "--nocapture",
            ])
            .env(CHILD_ENV, "1")
            .env("RUST_LOG", "info")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains(MESSAGE));
        assert!(!String::from_utf8_lossy(&output.stdout).contains(MESSAGE));
    }

    #[test]
    fn test_build_file_writer_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let _writer = build_file_writer(&log_dir);

        assert!(log_dir.is_dir());
    }
}
