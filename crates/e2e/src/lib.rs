//! OrderSight storefront E2E suite
//!
//! Drives a third-party e-commerce storefront through login, browsing,
//! cart, checkout, and logout. The browser is controlled through one
//! persistent Playwright session spawned as a `node` subprocess; Rust
//! sends newline-delimited JSON commands and receives id-tagged
//! replies.
//!
//! Layers:
//! - [`driver`] — the browser session and its wire protocol
//! - [`locator`] — element locator strategies, lowered at action time
//! - [`page`] — shared navigation/wait/assertion primitives
//! - [`pages`] — one page object per storefront screen
//! - [`fixtures`] — randomized (optionally seeded) test data
//! - [`api`] — armed network-response waiter

pub mod api;
pub mod config;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod locator;
pub mod page;
pub mod pages;

pub use config::SuiteConfig;
pub use error::{SuiteError, SuiteResult};
pub use locator::Locator;
pub use page::{CookieBannerOutcome, Page};
