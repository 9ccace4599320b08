//! Site-wide navigation bar

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct NavigationBar {
    page: Page,
    logout_button: Locator,
    user_profile_link: Locator,
    login_link: Locator,
}

impl NavigationBar {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            logout_button: Locator::role("button", "Logout"),
            user_profile_link: Locator::role("link", "profile"),
            login_link: Locator::role("link", "Login"),
        }
    }

    pub async fn click_logout(&self) -> SuiteResult<()> {
        self.page.click(&self.logout_button).await?;
        self.page.wait_for_page_load().await
    }

    /// Logged in: profile and logout visible, login link gone.
    pub async fn verify_user_logged_in(&self) -> SuiteResult<()> {
        self.page
            .expect_visible("profile link", &self.user_profile_link)
            .await?;
        self.page.expect_visible("logout button", &self.logout_button).await?;
        self.page.expect_hidden("login link", &self.login_link).await
    }

    /// Logged out: the inverse.
    pub async fn verify_user_logged_out(&self) -> SuiteResult<()> {
        self.page
            .expect_hidden("profile link", &self.user_profile_link)
            .await?;
        self.page.expect_hidden("logout button", &self.logout_button).await?;
        self.page.expect_visible("login link", &self.login_link).await
    }
}
