//! Product listing screen

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct ProductPage {
    page: Page,
    first_product_card: Locator,
    product_detail_name: Locator,
    product_detail_price: Locator,
    product_detail_image: Locator,
}

impl ProductPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            first_product_card: Locator::css(".product-card").first(),
            product_detail_name: Locator::css("h1"),
            product_detail_price: Locator::css(".product-detail-price"),
            product_detail_image: Locator::role("img", "product image"),
        }
    }

    fn category_link(category_name: &str) -> Locator {
        Locator::role("link", category_name.to_string())
    }

    pub async fn navigate_to_category(&self, category_name: &str) -> SuiteResult<()> {
        self.page.click(&Self::category_link(category_name)).await?;
        self.page.wait_for_page_load().await?;
        self.page
            .verify_url_contains(&format!("category={}", category_name.to_lowercase()))
            .await
    }

    pub async fn select_first_product(&self) -> SuiteResult<()> {
        self.page
            .expect_visible("first product card", &self.first_product_card)
            .await?;
        self.page.click(&self.first_product_card).await?;
        self.page.wait_for_page_load().await
    }

    /// Assert the product detail view rendered: name, price, and an
    /// image with a source.
    pub async fn validate_product_detail_loaded(&self) -> SuiteResult<()> {
        self.page
            .expect_non_empty_text("product name", &self.product_detail_name)
            .await?;
        self.page
            .expect_non_empty_text("product price", &self.product_detail_price)
            .await?;
        self.page
            .expect_visible("product image", &self.product_detail_image)
            .await
    }

    /// The displayed product name, captured for later cart checks.
    pub async fn product_name(&self) -> SuiteResult<String> {
        self.page
            .expect_non_empty_text("product name", &self.product_detail_name)
            .await
    }
}
