//! Cart screen

use crate::error::{SuiteError, SuiteResult};
use crate::locator::Locator;
use crate::page::Page;

/// Details of one line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemDetails {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

pub struct CartPage {
    page: Page,
    cart_items: Locator,
    cart_total: Locator,
    proceed_to_checkout_button: Locator,
    empty_cart_message: Locator,
}

impl CartPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            cart_items: Locator::css(".cart-item"),
            cart_total: Locator::text("Total"),
            proceed_to_checkout_button: Locator::role("button", "Proceed to Checkout"),
            empty_cart_message: Locator::text("Your cart is empty"),
        }
    }

    fn item(product_name: &str) -> Locator {
        Locator::css(".cart-item").with_text(product_name).first()
    }

    /// An element inside the matching line item.
    fn within_item(product_name: &str, inner: &str) -> Locator {
        Locator::css(format!(r#".cart-item:has-text("{product_name}") {inner}"#))
    }

    pub async fn cart_item_details(&self, product_name: &str) -> SuiteResult<CartItemDetails> {
        let item = Self::item(product_name);
        self.page.expect_visible("cart item", &item).await?;

        let name = self.page.text_of(&item).await?;
        let quantity = self
            .page
            .value_of(&Self::within_item(product_name, r#"input[type="number"]"#))
            .await?;
        let price = self
            .page
            .text_of(&Self::within_item(product_name, ".item-price"))
            .await?;

        Ok(CartItemDetails { name, quantity, price })
    }

    pub async fn update_item_quantity(&self, product_name: &str, new_quantity: u32) -> SuiteResult<()> {
        let quantity_input = Self::within_item(product_name, r#"input[type="number"]"#);
        self.page.fill(&quantity_input, &new_quantity.to_string()).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn remove_item(&self, product_name: &str) -> SuiteResult<()> {
        let remove_button = Self::within_item(product_name, r#"button[aria-label="Remove"]"#);
        self.page.click(&remove_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn proceed_to_checkout(&self) -> SuiteResult<()> {
        self.page.click(&self.proceed_to_checkout_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn verify_cart_is_empty(&self) -> SuiteResult<()> {
        self.page
            .expect_visible("empty cart message", &self.empty_cart_message)
            .await?;
        self.page.expect_count("cart items", &self.cart_items, 0).await
    }

    /// Assert a product line item exists with the expected quantity and
    /// a price containing the given fragment.
    pub async fn verify_product_in_cart(
        &self,
        product_name: &str,
        quantity: u32,
        price_fragment: &str,
    ) -> SuiteResult<()> {
        let details = self.cart_item_details(product_name).await?;

        if !details.name.contains(product_name) {
            return Err(SuiteError::assertion(
                "cart item name",
                format!("contains {product_name:?}"),
                details.name,
            ));
        }
        if details.quantity != quantity.to_string() {
            return Err(SuiteError::assertion(
                "cart item quantity",
                quantity.to_string(),
                details.quantity,
            ));
        }
        if !details.price.contains(price_fragment) {
            return Err(SuiteError::assertion(
                "cart item price",
                format!("contains {price_fragment:?}"),
                details.price,
            ));
        }
        Ok(())
    }

    pub async fn verify_cart_total(&self, expected_total: &str) -> SuiteResult<()> {
        self.page
            .expect_text_contains("cart total", &self.cart_total, expected_total)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_locator_narrows_by_product_name() {
        assert_eq!(
            CartPage::item("Widget").to_selector(),
            r#".cart-item:has-text("Widget") >> nth=0"#
        );
        assert_eq!(
            CartPage::within_item("Widget", ".item-price").to_selector(),
            r#".cart-item:has-text("Widget") .item-price"#
        );
    }
}
