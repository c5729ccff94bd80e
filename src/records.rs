use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTestResult {
    pub wpm: u32,
    /// Percentage, 0-100.
    pub accuracy: f32,
}

/// Captured email with consent and attribution, stored before any account
/// exists. Only normalizes; persistence lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Lowercased; unique key.
    pub email: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_test_result: Option<SpeedTestResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub marketing_consent: bool,
    #[serde(default)]
    pub converted_to_user: bool,
    /// Unix seconds.
    pub created_at: i64,
}

impl Lead {
    pub fn new(email: &str, source: impl Into<String>, created_at: i64) -> Result<Self> {
        Ok(Self {
            email: normalize_email(email)?,
            source: source.into(),
            speed_test_result: None,
            referral_code: None,
            country: None,
            marketing_consent: false,
            converted_to_user: false,
            created_at,
        })
    }

    /// Accuracy is clamped to 0-100; NaN and infinities are stored as 0.
    pub fn with_speed_test(mut self, wpm: u32, accuracy: f32) -> Self {
        let accuracy = if accuracy.is_finite() {
            accuracy.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.speed_test_result = Some(SpeedTestResult { wpm, accuracy });
        self
    }
}

/// Trim and lowercase `email`, rejecting anything without a local part and a
/// dotted domain.
pub fn normalize_email(email: &str) -> Result<String> {
    let normalized = email.trim().to_lowercase();
    let valid = match normalized.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !normalized.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(normalized)
}

/// Billing status as reported by the payment provider's webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Incomplete,
    IncompleteExpired,
    Unpaid,
    Paused,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Incomplete => "incomplete",
            Self::IncompleteExpired => "incomplete_expired",
            Self::Unpaid => "unpaid",
            Self::Paused => "paused",
        }
    }

    pub fn grants_access(&self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }
}

/// Billing entitlement as synced from the payment webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Account id from the identity provider.
    pub clerk_id: String,
    pub status: SubscriptionStatus,
    pub plan: String,
    /// Unix seconds.
    pub current_period_start: i64,
    /// Unix seconds.
    pub current_period_end: i64,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    pub stripe_subscription_id: String,
}

impl Subscription {
    pub fn is_premium(&self, now: i64) -> bool {
        self.status.grants_access() && now < self.current_period_end
    }
}

/// Answer to "is this account premium right now".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumStatus {
    pub is_premium: bool,
    pub plan: Option<String>,
    pub current_period_end: Option<i64>,
    pub cancel_at_period_end: bool,
}

impl PremiumStatus {
    pub fn free() -> Self {
        Self {
            is_premium: false,
            plan: None,
            current_period_end: None,
            cancel_at_period_end: false,
        }
    }

    pub fn from_subscription(subscription: Option<&Subscription>, now: i64) -> Self {
        match subscription {
            Some(s) if s.is_premium(now) => Self {
                is_premium: true,
                plan: Some(s.plan.clone()),
                current_period_end: Some(s.current_period_end),
                cancel_at_period_end: s.cancel_at_period_end,
            },
            _ => Self::free(),
        }
    }
}
