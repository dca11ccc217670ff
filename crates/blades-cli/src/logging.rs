use anyhow::Result;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Filter directives for a verbosity level.
///
/// 0 = info, 1 = debug with noisy HTTP internals suppressed, 2+ = trace.
pub fn filter_directives(verbose_level: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose_level {
        0 => "info",
        1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn,reqwest=info",
        _ => "trace",
    }
}

/// JSON logs when `RUST_LOG_JSON=true`, or by default when stdout is not a terminal
fn json_requested() -> bool {
    std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stdout().is_terminal())
}

/// Daily-rotated appender; `blades.log` becomes `blades.<date>` files
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let prefix = log_path
        .file_stem()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, prefix))
}

pub fn init_logging(verbose_level: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new(filter_directives(verbose_level, quiet))
    } else {
        // RUST_LOG wins over the verbosity flags
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose_level, quiet)))
    };

    let json = json_requested();

    let layer = match log_file {
        Some(path) => {
            let appender = file_appender(path)?;
            if json {
                fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(appender).boxed()
            } else {
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(appender)
                    .boxed()
            }
        }
        None => {
            if json {
                fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr).boxed()
            } else {
                fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr).boxed()
            }
        }
    };

    Registry::default().with(filter).with(layer).init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(0, false), "info");
        assert!(filter_directives(1, false).starts_with("debug,"));
        assert_eq!(filter_directives(3, false), "trace");
        assert_eq!(filter_directives(2, true), "error");
    }

    #[test]
    fn test_file_appender_rejects_bare_root() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
