use crate::config::Breakpoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    Mobile,
    Tablet,
    Desktop,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Viewport width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSize {
    Small,
    Medium,
    Large,
}

impl ScreenSize {
    pub fn from_width(width: u32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.small_max {
            Self::Small
        } else if width < breakpoints.large_min {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}
