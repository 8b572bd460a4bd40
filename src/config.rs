//! Color lookup and defaults for the hellokube server.
//!
//! The background color comes from the `UI_COLOR` environment variable and
//! is resolved on every request, not cached at startup, so a value injected
//! by the orchestrator is always the one rendered. `ColorSource` wraps the
//! lookup behind a cloneable handle so the handler can be tested against a
//! fixed value without touching real process environment.
//!
use std::env;
use std::sync::Arc;

/// Environment variable controlling the page background color
pub const COLOR_VAR: &str = "UI_COLOR";

/// Fallback color used when the variable is unset or empty
pub const DEFAULT_COLOR: &str = "white";

type Lookup = dyn Fn() -> Option<String> + Send + Sync;

/// Injected lookup capability returning the raw `UI_COLOR` value
#[derive(Clone)]
pub struct ColorSource {
    lookup: Arc<Lookup>,
}

impl ColorSource {
    /// Build a source from an arbitrary lookup function
    pub fn new(lookup: impl Fn() -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Source reading `UI_COLOR` from the process environment on each call
    pub fn from_env() -> Self {
        Self::new(|| env::var(COLOR_VAR).ok())
    }

    /// Source returning a fixed value
    pub fn fixed(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(move || Some(value.clone()))
    }

    /// Source behaving as if `UI_COLOR` were never set
    pub fn unset() -> Self {
        Self::new(|| None)
    }

    /// Resolve the current color.
    ///
    /// An empty value is treated the same as an unset variable: both fall
    /// back to [`DEFAULT_COLOR`].
    pub fn resolve(&self) -> String {
        match (self.lookup)() {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_COLOR.to_string(),
        }
    }
}
