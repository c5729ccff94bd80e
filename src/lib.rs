mod analytics;
mod classifier;
mod config;
mod error;
mod gate;
mod literal;
mod matcher;
mod mixer;
mod records;
mod types;
mod viewport;
mod word_sets;

pub use analytics::AnalyticsInjector;
pub use classifier::DeviceClassifier;
pub use config::{Breakpoints, ClassifierConfig};
pub use error::{Error, Result};
pub use gate::{should_show_mobile_landing, MobileGate};
pub use mixer::{
    deduplicate_words, mix, mix_two_sources, mix_two_sources_with, mix_with, pick_random,
    pick_random_with, shuffle, DEFAULT_PRIMARY_RATIO,
};
pub use records::{
    normalize_email, Lead, PremiumStatus, SpeedTestResult, Subscription, SubscriptionStatus,
};
pub use types::*;
pub use viewport::{ViewportEvent, ViewportEvents, ViewportSubscription};
pub use word_sets::WordSourceSet;
