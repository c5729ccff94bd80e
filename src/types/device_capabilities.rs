/// Whether a physical keyboard has been observed.
///
/// Classification always yields `Unknown`; only an observed keystroke
/// (see [`crate::MobileGate::on_keystroke`]) refines it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardPresence {
    #[default]
    Unknown,
    Present,
}

impl KeyboardPresence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Present => "present",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    pub is_mobile: bool,
    /// Only ever set when `is_mobile` is false.
    pub is_tablet: bool,
    pub has_touch_screen: bool,
    pub has_physical_keyboard: KeyboardPresence,
}

impl DeviceCapabilities {
    pub fn form_factor(&self) -> super::FormFactor {
        if self.is_mobile {
            super::FormFactor::Mobile
        } else if self.is_tablet {
            super::FormFactor::Tablet
        } else {
            super::FormFactor::Desktop
        }
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardPresence) -> Self {
        self.has_physical_keyboard = keyboard;
        self
    }
}
