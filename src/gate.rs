use std::sync::Arc;

use super::classifier::DeviceClassifier;
use super::types::{DeviceCapabilities, Environment, KeyboardPresence};

/// Whether to route the visitor to the touch-only landing experience.
pub fn should_show_mobile_landing(caps: &DeviceCapabilities, keyboard_verified: bool) -> bool {
    (caps.is_mobile || caps.is_tablet) && !keyboard_verified
}

/// Holds the latest classification and keyboard evidence for one visitor
/// session and re-evaluates the landing decision whenever either changes.
pub struct MobileGate {
    classifier: Arc<DeviceClassifier>,
    capabilities: DeviceCapabilities,
    keyboard_verified: bool,
}

impl MobileGate {
    /// Classifies eagerly so the first decision is available before any
    /// viewport event arrives.
    pub fn new(classifier: Arc<DeviceClassifier>, env: &Environment) -> Self {
        let capabilities = classifier.classify(env);
        Self {
            classifier,
            capabilities,
            keyboard_verified: false,
        }
    }

    pub fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    pub fn keyboard_verified(&self) -> bool {
        self.keyboard_verified
    }

    pub fn show_mobile_landing(&self) -> bool {
        should_show_mobile_landing(&self.capabilities, self.keyboard_verified)
    }

    /// Re-classify after a resize or orientation change. Keyboard evidence
    /// already gathered survives re-classification.
    pub fn on_viewport_change(&mut self, env: &Environment) -> bool {
        let keyboard = self.capabilities.has_physical_keyboard;
        self.capabilities = self.classifier.classify(env).with_keyboard(keyboard);
        self.show_mobile_landing()
    }

    /// A physical key press was observed.
    pub fn on_keystroke(&mut self) -> bool {
        if !self.keyboard_verified {
            tracing::debug!("physical keyboard verified");
        }
        self.keyboard_verified = true;
        self.capabilities.has_physical_keyboard = KeyboardPresence::Present;
        self.show_mobile_landing()
    }
}
