//! Home / storefront landing screen

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct HomePage {
    page: Page,
    search_input: Locator,
    search_button: Locator,
    cart_icon: Locator,
    cart_count: Locator,
}

impl HomePage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            search_input: Locator::css(r#"input[name="search"]"#),
            search_button: Locator::css(r#"button[type="submit"][aria-label="Search"]"#),
            cart_icon: Locator::role("link", "cart"),
            cart_count: Locator::css(".cart-icon .count"),
        }
    }

    pub async fn search_product(&self, product_name: &str) -> SuiteResult<()> {
        self.page.fill(&self.search_input, product_name).await?;
        self.page.click(&self.search_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn cart_count(&self) -> SuiteResult<String> {
        self.page.text_of(&self.cart_count).await
    }

    /// Assert the cart badge shows the expected item count.
    pub async fn verify_cart_count(&self, expected: u32) -> SuiteResult<()> {
        self.page
            .expect_text_contains("cart count", &self.cart_count, &expected.to_string())
            .await
    }

    pub async fn navigate_to_cart(&self) -> SuiteResult<()> {
        self.page.click(&self.cart_icon).await?;
        self.page.wait_for_page_load().await
    }
}
