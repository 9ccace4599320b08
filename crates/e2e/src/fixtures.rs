//! Test fixture data
//!
//! Randomized customer and payment fixtures, generated per run and
//! discarded at test end. The random source is injectable: a seeded
//! generator reproduces the exact same fixtures, so a failing run can
//! be replayed bit-for-bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Customer identity and shipping address for checkout. State, zip and
/// country are constants, not a real geo-randomizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Dummy card details; never real payment data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// Fixture generator over an owned random source.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Fresh entropy; runs are not reproducible.
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Seeded source for repeatable runs.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Alphanumeric string of the given length.
    pub fn random_string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| CHARSET[self.rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }

    /// `testuser_<5 chars>@example.com`.
    pub fn random_email(&mut self) -> String {
        format!("testuser_{}@example.com", self.random_string(5))
    }

    /// `555-NNNN-NNNN` style phone number.
    pub fn phone(&mut self) -> String {
        format!(
            "555-{}-{}",
            self.rng.gen_range(1000..10000),
            self.rng.gen_range(1000..10000)
        )
    }

    /// Full customer fixture with constant state/zip/country.
    pub fn address(&mut self) -> CustomerInfo {
        CustomerInfo {
            first_name: self.random_string(5),
            last_name: self.random_string(7),
            email: self.random_email(),
            phone: self.phone(),
            address_line1: format!("{} {} St", self.rng.gen_range(0..1000), self.random_string(8)),
            city: self.random_string(6),
            state: "CA".to_string(),
            zip: "90210".to_string(),
            country: "US".to_string(),
        }
    }

    /// Dummy card accepted by test payment gateways.
    pub fn payment(&mut self) -> PaymentDetails {
        PaymentDetails {
            card_number: "1111222233334444".to_string(),
            expiry_date: "12/25".to_string(),
            cvv: format!("{}", self.rng.gen_range(100..1000)),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
