//! Page objects
//!
//! One module per storefront screen. Each page object owns the named
//! locators for its screen and exposes one method per user action;
//! composite actions run their primitives in fixed order with a
//! network-idle wait after every state-changing step. Verification
//! methods are hard assertions.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod login;
pub mod navigation;
pub mod order_confirmation;
pub mod product;
pub mod product_detail;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use navigation::NavigationBar;
pub use order_confirmation::OrderConfirmationPage;
pub use product::ProductPage;
pub use product_detail::ProductDetailPage;
