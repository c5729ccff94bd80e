use serde::Deserialize;

/// Snapshot of the ambient signals the classifier reads.
///
/// Every signal is optional; `Environment::default()` stands for a context
/// with no interactive runtime at all (server render, headless job) and
/// classifies as a plain non-touch device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Layout viewport width in CSS pixels.
    pub viewport_width: Option<u32>,
    /// Whether the runtime exposes a touch-start event capability.
    pub touch_start: bool,
    /// Maximum simultaneous touch points reported by the runtime.
    pub max_touch_points: u32,
    /// Raw User-Agent string.
    pub user_agent: Option<String>,
    /// Platform string (e.g. `MacIntel`, `iPad`, `Win32`).
    pub platform: Option<String>,
}

impl Environment {
    pub fn has_touch(&self) -> bool {
        self.touch_start || self.max_touch_points > 0
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("")
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or("")
    }
}

/// Something that can produce the current [`Environment`].
///
/// Returning `None` means the signals are unavailable entirely.
pub trait EnvironmentSource {
    fn snapshot(&self) -> Option<Environment>;
}

impl EnvironmentSource for Environment {
    fn snapshot(&self) -> Option<Environment> {
        Some(self.clone())
    }
}

impl<T: EnvironmentSource> EnvironmentSource for Option<T> {
    fn snapshot(&self) -> Option<Environment> {
        self.as_ref().and_then(EnvironmentSource::snapshot)
    }
}
