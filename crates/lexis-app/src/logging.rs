use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub enum LogTarget {
    /// The terminal belongs to the UI, so logs go to a file
    File(PathBuf),
    Stderr,
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_logging(target: LogTarget) -> anyhow::Result<()> {
    let filter = env_filter(std::env::var("LEXIS_LOG").ok());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(env_filter(None).to_string(), "info");
    }

    #[test]
    fn filter_takes_directives() {
        let filter = env_filter(Some("lexis_core=debug".into()));
        assert_eq!(filter.to_string(), "lexis_core=debug");
    }
}
