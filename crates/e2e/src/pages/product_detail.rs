//! Product detail screen

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct ProductDetailPage {
    page: Page,
    product_description: Locator,
    quantity_input: Locator,
    add_to_cart_button: Locator,
}

impl ProductDetailPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            product_description: Locator::css(".product-detail-description"),
            quantity_input: Locator::css(r#"input[name="quantity"]"#),
            add_to_cart_button: Locator::role("button", "Add to Cart"),
        }
    }

    pub async fn product_description(&self) -> SuiteResult<String> {
        self.page.text_of(&self.product_description).await
    }

    pub async fn set_quantity(&self, quantity: u32) -> SuiteResult<()> {
        self.page.fill(&self.quantity_input, &quantity.to_string()).await
    }

    pub async fn add_to_cart(&self) -> SuiteResult<()> {
        self.page.click(&self.add_to_cart_button).await?;
        self.page.wait_for_page_load().await
    }
}
