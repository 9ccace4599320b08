//! Order confirmation screen

use crate::error::SuiteResult;
use crate::locator::Locator;
use crate::page::Page;

pub struct OrderConfirmationPage {
    page: Page,
    confirmation_header: Locator,
    order_number: Locator,
    order_total: Locator,
    continue_shopping_button: Locator,
    success_message: Locator,
}

impl OrderConfirmationPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            confirmation_header: Locator::role("heading", "Order Confirmation"),
            order_number: Locator::text("Order #"),
            order_total: Locator::text("Total:"),
            continue_shopping_button: Locator::role("button", "Continue Shopping"),
            success_message: Locator::text("Your order has been placed"),
        }
    }

    pub async fn extract_order_number(&self) -> SuiteResult<String> {
        self.page.text_of(&self.order_number).await
    }

    pub async fn order_total(&self) -> SuiteResult<String> {
        self.page.text_of(&self.order_total).await
    }

    pub async fn continue_shopping(&self) -> SuiteResult<()> {
        self.page.click(&self.continue_shopping_button).await?;
        self.page.wait_for_page_load().await
    }

    /// Assert the confirmation header and success message rendered.
    pub async fn validate_order_confirmation_text(&self) -> SuiteResult<()> {
        self.page
            .expect_visible("confirmation header", &self.confirmation_header)
            .await?;
        self.page
            .expect_visible("success message", &self.success_message)
            .await
    }

    pub async fn verify_order_number_present(&self) -> SuiteResult<()> {
        self.page
            .expect_non_empty_text("order number", &self.order_number)
            .await?;
        Ok(())
    }

    pub async fn verify_order_total(&self, expected_total: &str) -> SuiteResult<()> {
        self.page
            .expect_text_contains("order total", &self.order_total, expected_total)
            .await
    }
}
