//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise this crate, the `shared` crate (which
//! renders and logs system errors) and the HTTP trace layer log at the
//! configured level. With a log directory, output goes to a daily
//! rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

fn default_filter(level: &str) -> String {
    format!("grill_server={level},shared={level},tower_http={level}")
}

/// Initialize the global subscriber
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "grill-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("Cannot create log directory {dir}, logging to stdout");
    }

    subscriber.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::response::IntoResponse;
    use shared::AppError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    /// Counts error-level events that pass the filter
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_default_filter_covers_http_layer() {
        assert_eq!(
            default_filter("debug"),
            "grill_server=debug,shared=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_default_filter_keeps_rendered_system_errors() {
        let seen = Arc::new(AtomicUsize::new(0));
        let subscriber = Registry::default()
            .with(EnvFilter::new(default_filter("info")))
            .with(ErrorCounter(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let _ = AppError::database("disk full").into_response();
            let _ = AppError::required_field("zone").into_response();
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
