//! Region-specific value formats the `fake` locale data does not cover.

use rand::seq::SliceRandom;
use rand::Rng;

use super::locale::Locale;
use super::pattern::{generate_pattern, random_letter};
use super::FieldKind;

/// Canadian province and territory abbreviations.
pub const CA_PROVINCE_ABBRS: [&str; 13] = [
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

// Letters never used in Canadian postal codes: D, F, I, O, Q, U (W, Z not first).
const CA_POSTAL_FIRST_LETTERS: &[u8] = b"ABCEGHJKLMNPRSTVXY";
const CA_POSTAL_LETTERS: &[u8] = b"ABCEGHJKLMNPRSTVWXYZ";

/// Value for `kind` in the locale's region, if the region overrides it.
pub fn regional_value<R: Rng>(locale: &Locale, kind: FieldKind, rng: &mut R) -> Option<String> {
    match (locale.region(), kind) {
        (Some("CA"), FieldKind::ProvinceAbbr) => CA_PROVINCE_ABBRS
            .choose(rng)
            .map(|abbr| abbr.to_string()),
        (Some("CA"), FieldKind::PostalCode) => Some(canadian_postal_code(rng)),
        (Some("CA"), FieldKind::Ssn) => Some(generate_pattern("^## ### ###", rng)),
        _ => None,
    }
}

/// Postal code in `A1A 1A1` form.
pub fn canadian_postal_code<R: Rng>(rng: &mut R) -> String {
    let mut code = String::with_capacity(7);
    code.push(random_letter(rng, CA_POSTAL_FIRST_LETTERS));
    code.push_str(&generate_pattern("#", rng));
    code.push(random_letter(rng, CA_POSTAL_LETTERS));
    code.push(' ');
    code.push_str(&generate_pattern("#", rng));
    code.push(random_letter(rng, CA_POSTAL_LETTERS));
    code.push_str(&generate_pattern("#", rng));
    code
}
