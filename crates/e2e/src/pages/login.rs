//! Login screen

use tracing::info;

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct LoginPage {
    page: Page,
    login_link: Locator,
    email_field: Locator,
    password_field: Locator,
    login_button: Locator,
    dashboard_header: Locator,
}

impl LoginPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            login_link: Locator::role("link", "login or register"),
            email_field: Locator::placeholder("E-mail address"),
            password_field: Locator::id("id_login_password"),
            login_button: Locator::role("button", "login"),
            dashboard_header: Locator::role("heading", "my account"),
        }
    }

    /// Open the storefront, dismiss the cookie banner if present, and
    /// follow the login link.
    pub async fn goto_login_page(&self) -> SuiteResult<()> {
        self.page.navigate("/").await?;
        let outcome = self.page.dismiss_cookie_banner().await?;
        info!(?outcome, "cookie banner handled");

        self.page.click(&self.login_link).await?;
        self.page.wait_for_page_load().await?;
        self.page.verify_url_contains("/login").await
    }

    pub async fn fill_username(&self, username: &str) -> SuiteResult<()> {
        self.page.expect_visible("email field", &self.email_field).await?;
        self.page.fill(&self.email_field, username).await
    }

    pub async fn fill_password(&self, password: &str) -> SuiteResult<()> {
        self.page.expect_visible("password field", &self.password_field).await?;
        self.page.fill(&self.password_field, password).await
    }

    pub async fn submit_login(&self) -> SuiteResult<()> {
        self.page.click(&self.login_button).await
    }

    /// Full login flow, ending on the account dashboard.
    pub async fn login(&self, username: &str, password: &str) -> SuiteResult<()> {
        self.goto_login_page().await?;
        self.fill_username(username).await?;
        self.fill_password(password).await?;
        self.submit_login().await?;
        self.verify_login_success().await
    }

    pub async fn verify_login_success(&self) -> SuiteResult<()> {
        self.page
            .expect_visible("account dashboard header", &self.dashboard_header)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locators_lower_to_expected_selectors() {
        let login_link = Locator::role("link", "login or register");
        assert_eq!(login_link.to_selector(), r#"role=link[name="login or register"i]"#);
        assert_eq!(
            Locator::placeholder("E-mail address").to_selector(),
            r#"[placeholder="E-mail address"]"#
        );
        assert_eq!(Locator::id("id_login_password").to_selector(), "#id_login_password");
    }
}
