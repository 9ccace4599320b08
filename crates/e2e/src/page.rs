//! Shared page primitives
//!
//! `Page` is the one handle every page object holds: navigation,
//! network-idle waits, element actions, and hard assertions over a
//! shared browser session. Page objects compose over it instead of
//! inheriting from a base class.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::driver::{BrowserSession, Command, WaitState, DEFAULT_WAIT_TIMEOUT_MS};
use crate::error::{SuiteError, SuiteResult};
use crate::locator::Locator;

/// Bounded-time visibility probe used for the cookie banner.
const BANNER_PROBE_TIMEOUT_MS: u64 = 2_000;

/// What `dismiss_cookie_banner` actually did. Banner absence is a
/// normal outcome, not an error; callers decide whether it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieBannerOutcome {
    AllowClicked,
    DenyClicked,
    NoBanner,
}

/// Cloneable handle over the browser session plus the storefront base
/// URL.
#[derive(Clone)]
pub struct Page {
    session: Arc<BrowserSession>,
    base_url: String,
}

impl Page {
    /// Launch a fresh browser session for this configuration.
    pub async fn launch(config: &SuiteConfig) -> SuiteResult<Self> {
        let session = BrowserSession::launch(config).await?;
        Ok(Self {
            session: Arc::new(session),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn session(&self) -> &BrowserSession {
        &self.session
    }

    /// Load a URL; navigation failure is a hard error.
    pub async fn navigate(&self, url: &str) -> SuiteResult<()> {
        let url = join_url(&self.base_url, url);
        debug!(%url, "navigate");
        self.session.send(Command::Goto { url }).await?;
        Ok(())
    }

    /// Coarse readiness barrier: suspend until the network is idle.
    pub async fn wait_for_page_load(&self) -> SuiteResult<()> {
        self.session.send(Command::WaitIdle).await?;
        Ok(())
    }

    pub async fn current_url(&self) -> SuiteResult<String> {
        let value = self.session.send(Command::CurrentUrl).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    pub async fn title(&self) -> SuiteResult<String> {
        let value = self.session.send(Command::Title).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Assert the current URL contains the given fragment.
    pub async fn verify_url_contains(&self, fragment: &str) -> SuiteResult<()> {
        let url = self.current_url().await?;
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(SuiteError::assertion("page url", format!("contains {fragment:?}"), url))
        }
    }

    /// Assert the document title.
    pub async fn verify_title(&self, expected: &str) -> SuiteResult<()> {
        let title = self.title().await?;
        if title == expected {
            Ok(())
        } else {
            Err(SuiteError::assertion("page title", expected, title))
        }
    }

    // ------------------------------------------------------------------
    // Element actions. Locators resolve at this point, never earlier.
    // ------------------------------------------------------------------

    pub async fn click(&self, locator: &Locator) -> SuiteResult<()> {
        self.session
            .send(Command::Click {
                selector: locator.to_selector(),
                timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            })
            .await?;
        Ok(())
    }

    pub async fn fill(&self, locator: &Locator, value: &str) -> SuiteResult<()> {
        self.session
            .send(Command::Fill {
                selector: locator.to_selector(),
                value: value.to_string(),
            })
            .await?;
        Ok(())
    }

    pub async fn select_option(&self, locator: &Locator, value: &str) -> SuiteResult<()> {
        self.session
            .send(Command::SelectOption {
                selector: locator.to_selector(),
                value: value.to_string(),
            })
            .await?;
        Ok(())
    }

    pub async fn check(&self, locator: &Locator) -> SuiteResult<()> {
        self.session
            .send(Command::Check { selector: locator.to_selector() })
            .await?;
        Ok(())
    }

    pub async fn press(&self, locator: &Locator, key: &str) -> SuiteResult<()> {
        self.session
            .send(Command::Press {
                selector: locator.to_selector(),
                key: key.to_string(),
            })
            .await?;
        Ok(())
    }

    pub async fn text_of(&self, locator: &Locator) -> SuiteResult<String> {
        let value = self
            .session
            .send(Command::InnerText { selector: locator.to_selector() })
            .await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    pub async fn value_of(&self, locator: &Locator) -> SuiteResult<String> {
        let value = self
            .session
            .send(Command::InputValue { selector: locator.to_selector() })
            .await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    pub async fn count(&self, locator: &Locator) -> SuiteResult<u64> {
        let value = self
            .session
            .send(Command::Count { selector: locator.to_selector() })
            .await?;
        Ok(value.as_u64().unwrap_or_default())
    }

    /// Bounded visibility probe; absence is `false`, not an error.
    pub async fn is_visible(&self, locator: &Locator, timeout_ms: u64) -> SuiteResult<bool> {
        let value = self
            .session
            .send(Command::IsVisible {
                selector: locator.to_selector(),
                timeout_ms,
            })
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub async fn is_checked(&self, locator: &Locator) -> SuiteResult<bool> {
        let value = self
            .session
            .send(Command::IsChecked { selector: locator.to_selector() })
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub async fn wait_visible(&self, locator: &Locator) -> SuiteResult<()> {
        self.session
            .send(Command::WaitSelector {
                selector: locator.to_selector(),
                timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
                state: WaitState::Visible,
            })
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Assertions. A mismatch is a hard failure that ends the scenario.
    // ------------------------------------------------------------------

    pub async fn expect_visible(&self, what: &str, locator: &Locator) -> SuiteResult<()> {
        if self.is_visible(locator, DEFAULT_WAIT_TIMEOUT_MS).await? {
            Ok(())
        } else {
            Err(SuiteError::assertion(what, "visible", "not visible"))
        }
    }

    pub async fn expect_hidden(&self, what: &str, locator: &Locator) -> SuiteResult<()> {
        if self.is_visible(locator, BANNER_PROBE_TIMEOUT_MS).await? {
            Err(SuiteError::assertion(what, "hidden", "visible"))
        } else {
            Ok(())
        }
    }

    pub async fn expect_text_contains(
        &self,
        what: &str,
        locator: &Locator,
        needle: &str,
    ) -> SuiteResult<()> {
        let text = self.text_of(locator).await?;
        if text.contains(needle) {
            Ok(())
        } else {
            Err(SuiteError::assertion(what, format!("contains {needle:?}"), text))
        }
    }

    pub async fn expect_non_empty_text(&self, what: &str, locator: &Locator) -> SuiteResult<String> {
        let text = self.text_of(locator).await?;
        if text.trim().is_empty() {
            Err(SuiteError::assertion(what, "non-empty text", "empty"))
        } else {
            Ok(text)
        }
    }

    pub async fn expect_value(&self, what: &str, locator: &Locator, expected: &str) -> SuiteResult<()> {
        let value = self.value_of(locator).await?;
        if value == expected {
            Ok(())
        } else {
            Err(SuiteError::assertion(what, expected, value))
        }
    }

    pub async fn expect_checked(&self, what: &str, locator: &Locator) -> SuiteResult<()> {
        if self.is_checked(locator).await? {
            Ok(())
        } else {
            Err(SuiteError::assertion(what, "checked", "unchecked"))
        }
    }

    pub async fn expect_count(&self, what: &str, locator: &Locator, expected: u64) -> SuiteResult<()> {
        let count = self.count(locator).await?;
        if count == expected {
            Ok(())
        } else {
            Err(SuiteError::assertion(what, expected.to_string(), count.to_string()))
        }
    }

    // ------------------------------------------------------------------
    // Cookie banner
    // ------------------------------------------------------------------

    /// Best-effort cookie banner dismissal: probe for an Allow control,
    /// then a Deny control, each within a bounded window; click the
    /// first one found and wait for the reload. Neither appearing is a
    /// normal outcome.
    pub async fn dismiss_cookie_banner(&self) -> SuiteResult<CookieBannerOutcome> {
        let allow = Locator::role("button", "allow");
        let deny = Locator::role("button", "deny");

        if self.is_visible(&allow, BANNER_PROBE_TIMEOUT_MS).await? {
            self.click(&allow).await?;
            self.wait_for_page_load().await?;
            return Ok(CookieBannerOutcome::AllowClicked);
        }

        if self.is_visible(&deny, BANNER_PROBE_TIMEOUT_MS).await? {
            self.click(&deny).await?;
            self.wait_for_page_load().await?;
            return Ok(CookieBannerOutcome::DenyClicked);
        }

        debug!("no cookie banner appeared");
        Ok(CookieBannerOutcome::NoBanner)
    }

    /// Raw session access for the API waiter.
    pub(crate) async fn send_raw(&self, command: Command) -> SuiteResult<Value> {
        self.session.send(command).await
    }

    /// Close the underlying browser session.
    pub async fn close(&self) -> SuiteResult<()> {
        self.session.close().await
    }
}

/// Resolve a path against the base URL; absolute URLs pass through.
fn join_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}/{}", base, url.trim_start_matches('/'))
    }
}
