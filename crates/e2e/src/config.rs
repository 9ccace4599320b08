//! Suite configuration
//!
//! Read from the process environment at suite startup. Missing
//! credentials fall back to fixed placeholders rather than failing
//! configuration; the scenario then fails later, at login, with a
//! normal assertion error.

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }

    fn parse(value: &str) -> Self {
        match value {
            "firefox" => Browser::Firefox,
            "webkit" => Browser::Webkit,
            _ => Browser::Chromium,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Storefront root URL.
    pub base_url: String,
    pub user_email: String,
    pub user_password: String,
    pub headless: bool,
    pub browser: Browser,
}

impl SuiteConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_or("BASE_URL", &defaults.base_url),
            user_email: env_or("USER_EMAIL", &defaults.user_email),
            user_password: env_or("USER_PASSWORD", &defaults.user_password),
            headless: env_or("ORDERSIGHT_E2E_HEADLESS", "1") != "0",
            browser: Browser::parse(&env_or("ORDERSIGHT_E2E_BROWSER", "chromium")),
        }
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://practicesoftwaretesting.com".to_string(),
            user_email: "test@example.com".to_string(),
            user_password: "password123".to_string(),
            headless: true,
            browser: Browser::Chromium,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
