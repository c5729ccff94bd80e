use std::sync::atomic::{AtomicBool, Ordering};

use super::error::{Error, Result};

/// Configures the analytics tag at most once.
///
/// Hold one per process (or per test) and call [`init`](Self::init) from
/// every render path; only the first call yields the snippet to inject.
#[derive(Debug)]
pub struct AnalyticsInjector {
    measurement_id: String,
    initialized: AtomicBool,
}

impl AnalyticsInjector {
    /// `measurement_id` must look like `G-XXXXXXX` (ASCII alphanumerics
    /// after the prefix).
    pub fn new(measurement_id: impl Into<String>) -> Result<Self> {
        let measurement_id = measurement_id.into();
        let valid = measurement_id
            .strip_prefix("G-")
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(Error::InvalidMeasurementId(measurement_id));
        }
        Ok(Self {
            measurement_id,
            initialized: AtomicBool::new(false),
        })
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Returns the tag snippet on the first call and `None` afterwards,
    /// including under concurrent callers.
    pub fn init(&self) -> Option<String> {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(id = %self.measurement_id, "analytics already initialized");
            return None;
        }
        tracing::info!(id = %self.measurement_id, "analytics initialized");
        Some(self.snippet())
    }

    /// Clear the latch so the next [`init`](Self::init) configures again.
    pub fn reset(&self) {
        self.initialized.store(false, Ordering::Release);
    }

    fn snippet(&self) -> String {
        let id = &self.measurement_id;
        format!(
            "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
             <script>window.dataLayer=window.dataLayer||[];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('js',new Date());gtag('config','{id}');</script>"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn validates_id() {
        assert!(AnalyticsInjector::new("G-ABC123").is_ok());
        for bad in ["", "G-", "UA-1234", "G-abc def", "g-ABC"] {
            assert!(
                matches!(AnalyticsInjector::new(bad), Err(Error::InvalidMeasurementId(_))),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn init_once_then_reset() {
        let a = AnalyticsInjector::new("G-TEST1").unwrap();
        let snippet = a.init().unwrap();
        assert!(snippet.contains("gtag('config','G-TEST1')"));
        assert!(a.is_initialized());
        assert!(a.init().is_none());

        a.reset();
        assert!(!a.is_initialized());
        assert!(a.init().is_some());
    }

    #[test]
    fn concurrent_init_configures_once() {
        let a = Arc::new(AnalyticsInjector::new("G-RACE").unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let a = Arc::clone(&a);
                std::thread::spawn(move || a.init().is_some())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }
}
