//! Test support: logging setup and span observation.

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex, Once};

use tracing::span::{Attributes, Id};
use tracing::{debug, info, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["treewalk::traversal"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Counts how many spans of each name are opened.
///
/// Every traversal function opens a span named after itself, so the count is the
/// number of times the function was entered.
#[derive(Debug, Clone, Default)]
pub struct SpanCounter {
    counts: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl SpanCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with this counter installed as the thread's subscriber.
    pub fn observe<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn count(&self, span_name: &str) -> usize {
        self.counts
            .lock()
            .map(|counts| counts.get(span_name).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn reset(&self) {
        if let Ok(mut counts) = self.counts.lock() {
            counts.clear();
        }
    }
}

impl<S: Subscriber> Layer<S> for SpanCounter {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        if let Ok(mut counts) = self.counts.lock() {
            *counts.entry(attrs.metadata().name()).or_default() += 1;
        }
    }
}
