//! Logging setup
//!
//! Logs go to stderr so command output on stdout stays pipeable. When
//! `LOG_DIR` points at an existing directory they go to a daily rolling
//! file there instead.

use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::AdminConfig;

const LOG_FILE_PREFIX: &str = "medi-admin";

/// Initialize the global subscriber
pub fn init_logger(config: &AdminConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match log_file_dir(config.log_dir.as_deref()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            builder.with_ansi(false).with_writer(file_appender).try_init()
        }
        None if config.is_production() => builder.json().with_writer(std::io::stderr).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logger: {e}"))
}

/// Directory for file output, only if it already exists
fn log_file_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir.map(Path::new).filter(|p| p.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_dir_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(log_file_dir(Some(path)), Some(dir.path()));

        let missing = dir.path().join("missing");
        assert_eq!(log_file_dir(missing.to_str()), None);
        assert_eq!(log_file_dir(None), None);
    }

    #[test]
    fn test_log_file_dir_rejects_plain_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(log_file_dir(file.path().to_str()), None);
    }
}
