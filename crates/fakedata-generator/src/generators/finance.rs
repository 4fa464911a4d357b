//! Credit card details other than the card number.

use chrono::{Datelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::pattern::generate_pattern;

/// Card network names.
pub const CREDIT_CARD_PROVIDERS: [&str; 10] = [
    "VISA 16 digit",
    "VISA 13 digit",
    "VISA 19 digit",
    "Mastercard",
    "American Express",
    "Discover",
    "Diners Club / Carte Blanche",
    "JCB 16 digit",
    "JCB 15 digit",
    "Maestro",
];

/// Years ahead of the current year an expiry date may fall.
const MAX_EXPIRY_YEARS: i32 = 10;

pub fn credit_card_provider<R: Rng>(rng: &mut R) -> String {
    CREDIT_CARD_PROVIDERS
        .choose(rng)
        .copied()
        .unwrap_or("Mastercard")
        .to_string()
}

/// Expiry date in `MM/YY` form, between now and ten years from now.
pub fn credit_card_expire<R: Rng>(rng: &mut R) -> String {
    let year = Utc::now().year() + rng.gen_range(0..=MAX_EXPIRY_YEARS);
    let month: u32 = rng.gen_range(1..=12);
    format!("{:02}/{:02}", month, year.rem_euclid(100))
}

/// Three digit card verification code.
pub fn credit_card_security_code<R: Rng>(rng: &mut R) -> String {
    generate_pattern("###", rng)
}
