use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber writing to stdout; `RUST_LOG` takes precedence over the configured level
pub fn init_logging(config: &LoggingConfig) {
    build_subscriber(config, std::io::stdout).init();
    tracing::info!("Logging initialized with level: {}", config.level);
}

/// Install the global subscriber writing to stderr, keeping stdout for command output
pub fn init_logging_to_stderr(config: &LoggingConfig) {
    build_subscriber(config, std::io::stderr).init();
}

fn build_subscriber<W>(config: &LoggingConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let layer: Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn json_config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: LogFormat::Json,
        }
    }

    #[test]
    fn test_events_go_to_the_given_writer() {
        let buffer = Buffer::default();
        let subscriber = build_subscriber(&json_config("info"), buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(backend = "memory", "Using in-memory directory");
        });

        let output = buffer.contents();
        assert!(output.contains("Using in-memory directory"));
        assert!(output.contains("\"backend\":\"memory\""));
    }

    #[test]
    fn test_level_filters_events() {
        let buffer = Buffer::default();
        let subscriber = build_subscriber(&json_config("warn"), buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("User resolved");
        });

        if std::env::var("RUST_LOG").is_err() {
            assert!(!buffer.contents().contains("User resolved"));
        }
    }
}
