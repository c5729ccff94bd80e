use super::{Environment, EnvironmentSource};

/// Request headers a server can classify from (`User-Agent`,
/// `Sec-CH-UA-Platform`, `Sec-CH-Viewport-Width`).
///
/// Touch capability is never observable from headers, so environments built
/// from hints only ever classify through the user-agent and platform rules.
#[derive(Debug, Clone, Default)]
pub struct ClientHints {
    /// Value of the `User-Agent` header.
    pub user_agent: Option<String>,
    /// Value of `Sec-CH-UA-Platform`, which is sent as a quoted string (`"macOS"`).
    pub platform: Option<String>,
    /// Value of `Sec-CH-Viewport-Width`.
    pub viewport_width: Option<String>,
}

impl EnvironmentSource for ClientHints {
    fn snapshot(&self) -> Option<Environment> {
        if self.user_agent.is_none() && self.platform.is_none() && self.viewport_width.is_none() {
            return None;
        }
        Some(Environment {
            viewport_width: self
                .viewport_width
                .as_deref()
                .and_then(|w| w.trim().parse().ok()),
            touch_start: false,
            max_touch_points: 0,
            user_agent: self.user_agent.clone(),
            platform: self
                .platform
                .as_deref()
                .map(|p| p.trim().trim_matches('"').to_string()),
        })
    }
}
