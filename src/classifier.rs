use rayon::prelude::*;

use super::config::{Breakpoints, ClassifierConfig};
use super::error::Result;
use super::matcher::TokenMatcher;
use super::types::*;

/// Compiled signal matchers, one per heuristic.
struct Signatures {
    mobile_ua: TokenMatcher,
    tablet_ua: TokenMatcher,
    desktop_os_ua: TokenMatcher,
    handheld_platform: TokenMatcher,
    ambiguous_platforms: Vec<String>,
}

/// Classifies an [`Environment`] into [`DeviceCapabilities`].
///
/// Classification is a pure function of the environment: no I/O, no state
/// carried between calls, and it never fails. Build one classifier at startup
/// and share it.
pub struct DeviceClassifier {
    breakpoints: Breakpoints,
    signatures: Signatures,
}

impl DeviceClassifier {
    /// Classifier with the built-in breakpoints and token lists.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClassifierConfig::default())
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let signatures = Signatures {
            mobile_ua: TokenMatcher::compile("mobile_user_agents", &config.mobile_user_agents)?,
            tablet_ua: TokenMatcher::compile("tablet_user_agents", &config.tablet_user_agents)?,
            desktop_os_ua: TokenMatcher::compile(
                "desktop_os_user_agents",
                &config.desktop_os_user_agents,
            )?,
            handheld_platform: TokenMatcher::compile(
                "handheld_platforms",
                &config.handheld_platforms,
            )?,
            ambiguous_platforms: config.ambiguous_platforms.clone(),
        };
        tracing::debug!(
            small_max = config.breakpoints.small_max,
            large_min = config.breakpoints.large_min,
            "device classifier ready"
        );
        Ok(Self {
            breakpoints: config.breakpoints.clone(),
            signatures,
        })
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Classify a snapshot of ambient signals.
    ///
    /// Mobile is decided first and wins: an environment carrying both mobile
    /// and tablet signals is reported as mobile only. `has_physical_keyboard`
    /// is always `Unknown` here.
    pub fn classify(&self, env: &Environment) -> DeviceCapabilities {
        let sig = &self.signatures;
        let ua = env.user_agent();
        let platform = env.platform();

        // 1. Touch
        let touch = env.has_touch();

        // 2. Screen bucket (unknown width contributes nothing)
        let size = env
            .viewport_width
            .map(|w| ScreenSize::from_width(w, &self.breakpoints));

        // 3-5. Mobile: small touch screen, or a mobile UA regardless of size
        let is_mobile = (size == Some(ScreenSize::Small) && touch) || sig.mobile_ua.is_match(ua);

        // 4, 6. Tablet, only considered when not mobile
        let is_tablet = !is_mobile && {
            let legacy_ua = sig.tablet_ua.is_match(ua);
            let disguised_desktop = touch && sig.desktop_os_ua.is_match(ua);
            let platform_hint = sig.handheld_platform.is_match(platform)
                || (touch && env.max_touch_points > 1 && self.is_ambiguous_platform(platform));
            let touch_screen = touch
                && matches!(size, Some(ScreenSize::Medium) | Some(ScreenSize::Large));

            legacy_ua || disguised_desktop || platform_hint || touch_screen
        };

        let caps = DeviceCapabilities {
            is_mobile,
            is_tablet,
            has_touch_screen: touch,
            has_physical_keyboard: KeyboardPresence::Unknown,
        };
        tracing::debug!(
            form_factor = caps.form_factor().as_str(),
            size = size.map(|s| s.as_str()).unwrap_or("unknown"),
            touch,
            "classified environment"
        );
        caps
    }

    /// Classify whatever the source currently reports; an unavailable
    /// environment yields the default (all false, keyboard unknown).
    pub fn classify_source(&self, source: &impl EnvironmentSource) -> DeviceCapabilities {
        match source.snapshot() {
            Some(env) => self.classify(&env),
            None => DeviceCapabilities::default(),
        }
    }

    /// Classify a batch of environments in parallel, preserving input order.
    pub fn classify_all(&self, envs: &[Environment]) -> Vec<DeviceCapabilities> {
        envs.par_iter().map(|env| self.classify(env)).collect()
    }

    fn is_ambiguous_platform(&self, platform: &str) -> bool {
        !platform.is_empty()
            && self
                .signatures
                .ambiguous_platforms
                .iter()
                .any(|p| p.eq_ignore_ascii_case(platform))
    }
}
