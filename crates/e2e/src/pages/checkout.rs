//! Checkout screen: address, shipping, and payment sections

use crate::error::SuiteResult;
use crate::fixtures::{CustomerInfo, PaymentDetails};
use crate::locator::Locator;
use crate::page::Page;

pub struct CheckoutPage {
    page: Page,
    first_name_input: Locator,
    last_name_input: Locator,
    email_input: Locator,
    phone_input: Locator,
    address_line1_input: Locator,
    city_input: Locator,
    state_input: Locator,
    zip_input: Locator,
    country_select: Locator,
    continue_to_shipping_button: Locator,
    continue_to_payment_button: Locator,
    card_number_input: Locator,
    expiry_date_input: Locator,
    cvv_input: Locator,
    place_order_button: Locator,
}

impl CheckoutPage {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            first_name_input: Locator::id("first_name"),
            last_name_input: Locator::id("last_name"),
            email_input: Locator::id("email"),
            phone_input: Locator::id("phone"),
            address_line1_input: Locator::id("address_line_1"),
            city_input: Locator::id("city"),
            state_input: Locator::id("state"),
            zip_input: Locator::id("zip"),
            country_select: Locator::id("country"),
            continue_to_shipping_button: Locator::role("button", "Continue to Shipping"),
            continue_to_payment_button: Locator::role("button", "Continue to Payment"),
            card_number_input: Locator::id("card_number"),
            expiry_date_input: Locator::id("expiry_date"),
            cvv_input: Locator::id("cvv"),
            place_order_button: Locator::role("button", "Place Order"),
        }
    }

    /// Radio input selected by its value attribute; shipping and
    /// payment methods share the markup convention.
    fn method_radio(method: &str) -> Locator {
        Locator::css(format!(r#"input[type="radio"][value="{method}"]"#))
    }

    /// Fill every customer/address field in fixed order.
    pub async fn fill_customer_info(&self, info: &CustomerInfo) -> SuiteResult<()> {
        self.page.fill(&self.first_name_input, &info.first_name).await?;
        self.page.fill(&self.last_name_input, &info.last_name).await?;
        self.page.fill(&self.email_input, &info.email).await?;
        self.page.fill(&self.phone_input, &info.phone).await?;
        self.page.fill(&self.address_line1_input, &info.address_line1).await?;
        self.page.fill(&self.city_input, &info.city).await?;
        self.page.fill(&self.state_input, &info.state).await?;
        self.page.fill(&self.zip_input, &info.zip).await?;
        self.page.select_option(&self.country_select, &info.country).await
    }

    pub async fn continue_to_shipping(&self) -> SuiteResult<()> {
        self.page.click(&self.continue_to_shipping_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn select_shipping_method(&self, method: &str) -> SuiteResult<()> {
        self.page.check(&Self::method_radio(method)).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn continue_to_payment(&self) -> SuiteResult<()> {
        self.page.click(&self.continue_to_payment_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn select_payment_method(&self, method: &str) -> SuiteResult<()> {
        self.page.check(&Self::method_radio(method)).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn fill_payment_details(&self, payment: &PaymentDetails) -> SuiteResult<()> {
        self.page.fill(&self.card_number_input, &payment.card_number).await?;
        self.page.fill(&self.expiry_date_input, &payment.expiry_date).await?;
        self.page.fill(&self.cvv_input, &payment.cvv).await
    }

    /// Click Place Order and wait for the resulting page. Callers that
    /// need the order API response must arm the waiter before calling
    /// this.
    pub async fn place_order(&self) -> SuiteResult<()> {
        self.page.click(&self.place_order_button).await?;
        self.page.wait_for_page_load().await
    }

    pub async fn verify_customer_info_prepopulated(&self, info: &CustomerInfo) -> SuiteResult<()> {
        self.page
            .expect_value("first name", &self.first_name_input, &info.first_name)
            .await?;
        self.page
            .expect_value("last name", &self.last_name_input, &info.last_name)
            .await?;
        self.page.expect_value("email", &self.email_input, &info.email).await
    }

    pub async fn verify_shipping_method_selected(&self, method: &str) -> SuiteResult<()> {
        self.page
            .expect_checked("shipping method radio", &Self::method_radio(method))
            .await
    }

    pub async fn verify_payment_method_selected(&self, method: &str) -> SuiteResult<()> {
        self.page
            .expect_checked("payment method radio", &Self::method_radio(method))
            .await
    }
}
