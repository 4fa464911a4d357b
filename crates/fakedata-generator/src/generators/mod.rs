//! Locale-aware fake value generators.
//!
//! This module maps each [`FieldKind`] to a concrete fake value. Most values
//! come from the `fake` crate's locale data; a few formats it does not cover
//! (card provider and expiry, SSNs, image URLs) are produced here.

pub mod finance;
pub mod locale;
pub mod pattern;
pub mod region;
pub mod web;

pub use locale::{Language, Locale};

use fake::faker::address::raw as address;
use fake::faker::company::raw as company;
use fake::faker::creditcard::raw as creditcard;
use fake::faker::internet::raw as internet;
use fake::faker::job::raw as job;
use fake::faker::name::raw as name;
use fake::faker::phone_number::raw as phone_number;
use fake::locales::{Data, AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::Rng;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    LastName,
    StreetAddress,
    City,
    ProvinceAbbr,
    PostalCode,
    Country,
    Email,
    PhoneNumber,
    Job,
    Ssn,
    Company,
    CreditCardNumber,
    CreditCardProvider,
    CreditCardExpire,
    CreditCardSecurityCode,
    CompanySuffix,
    CatchPhrase,
    Bs,
    ImageUrl,
    Url,
}

/// Source of fake values, one per [`FieldKind`].
pub trait FakeValueProvider {
    /// Generate a value of the given kind using the given RNG.
    fn fake_value<R: Rng>(&self, kind: FieldKind, rng: &mut R) -> String;
}

/// [`FakeValueProvider`] backed by the `fake` crate's locale data.
#[derive(Debug, Clone)]
pub struct LocaleProvider {
    locale: Locale,
}

impl LocaleProvider {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl FakeValueProvider for LocaleProvider {
    fn fake_value<R: Rng>(&self, kind: FieldKind, rng: &mut R) -> String {
        if let Some(value) = region::regional_value(&self.locale, kind, rng) {
            return value;
        }

        match self.locale.language() {
            Language::English => generate_with_locale(EN, kind, rng),
            Language::French => generate_with_locale(FR_FR, kind, rng),
            Language::Portuguese => generate_with_locale(PT_BR, kind, rng),
            Language::Japanese => generate_with_locale(JA_JP, kind, rng),
            Language::Arabic => generate_with_locale(AR_SA, kind, rng),
            Language::SimplifiedChinese => generate_with_locale(ZH_CN, kind, rng),
            Language::TraditionalChinese => generate_with_locale(ZH_TW, kind, rng),
        }
    }
}

/// Generate a value of the given kind from a `fake` locale.
pub fn generate_with_locale<L, R>(locale: L, kind: FieldKind, rng: &mut R) -> String
where
    L: Data + Copy,
    R: Rng,
{
    match kind {
        FieldKind::FirstName => name::FirstName(locale).fake_with_rng(rng),
        FieldKind::LastName => name::LastName(locale).fake_with_rng(rng),
        FieldKind::StreetAddress => {
            let number: String = address::BuildingNumber(locale).fake_with_rng(rng);
            let street: String = address::StreetName(locale).fake_with_rng(rng);
            format!("{number} {street}")
        }
        FieldKind::City => address::CityName(locale).fake_with_rng(rng),
        FieldKind::ProvinceAbbr => address::StateAbbr(locale).fake_with_rng(rng),
        FieldKind::PostalCode => address::PostCode(locale).fake_with_rng(rng),
        FieldKind::Country => address::CountryName(locale).fake_with_rng(rng),
        FieldKind::Email => internet::FreeEmail(locale).fake_with_rng(rng),
        FieldKind::PhoneNumber => phone_number::PhoneNumber(locale).fake_with_rng(rng),
        FieldKind::Job => job::Title(locale).fake_with_rng(rng),
        FieldKind::Ssn => pattern::generate_pattern("^##-##-####", rng),
        FieldKind::Company => company::CompanyName(locale).fake_with_rng(rng),
        FieldKind::CreditCardNumber => creditcard::CreditCardNumber(locale).fake_with_rng(rng),
        FieldKind::CreditCardProvider => finance::credit_card_provider(rng),
        FieldKind::CreditCardExpire => finance::credit_card_expire(rng),
        FieldKind::CreditCardSecurityCode => finance::credit_card_security_code(rng),
        FieldKind::CompanySuffix => company::CompanySuffix(locale).fake_with_rng(rng),
        FieldKind::CatchPhrase => company::CatchPhrase(locale).fake_with_rng(rng),
        FieldKind::Bs => company::Bs(locale).fake_with_rng(rng),
        FieldKind::ImageUrl => web::image_url(rng),
        FieldKind::Url => {
            let word: String = name::LastName(locale).fake_with_rng(rng);
            let suffix: String = internet::DomainSuffix(locale).fake_with_rng(rng);
            web::website(&word, &suffix, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL_KINDS: [FieldKind; 21] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::StreetAddress,
        FieldKind::City,
        FieldKind::ProvinceAbbr,
        FieldKind::PostalCode,
        FieldKind::Country,
        FieldKind::Email,
        FieldKind::PhoneNumber,
        FieldKind::Job,
        FieldKind::Ssn,
        FieldKind::Company,
        FieldKind::CreditCardNumber,
        FieldKind::CreditCardProvider,
        FieldKind::CreditCardExpire,
        FieldKind::CreditCardSecurityCode,
        FieldKind::CompanySuffix,
        FieldKind::CatchPhrase,
        FieldKind::Bs,
        FieldKind::ImageUrl,
        FieldKind::Url,
    ];

    fn provider(code: &str) -> LocaleProvider {
        LocaleProvider::new(code.parse().unwrap())
    }

    #[test]
    fn test_every_kind_produces_a_value() {
        for code in ["en_CA", "en_US", "fr_FR", "ja_JP", "ar_SA"] {
            let provider = provider(code);
            let mut rng = StdRng::seed_from_u64(42);
            for kind in ALL_KINDS {
                let value = provider.fake_value(kind, &mut rng);
                assert!(!value.is_empty(), "{code}: empty value for {kind:?}");
            }
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let provider = provider("en_CA");
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);
        for kind in ALL_KINDS {
            assert_eq!(
                provider.fake_value(kind, &mut rng1),
                provider.fake_value(kind, &mut rng2)
            );
        }
    }

    #[test]
    fn test_email_has_at_sign() {
        let provider = provider("en_US");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(provider.fake_value(FieldKind::Email, &mut rng).contains('@'));
        }
    }

    #[test]
    fn test_us_ssn_format() {
        let provider = provider("en_US");
        let mut rng = StdRng::seed_from_u64(3);
        let ssn = provider.fake_value(FieldKind::Ssn, &mut rng);
        let parts: Vec<&str> = ssn.split('-').collect();
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), [3, 2, 4]);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_credit_card_number_is_digits() {
        let provider = provider("en_CA");
        let mut rng = StdRng::seed_from_u64(11);
        let number = provider.fake_value(FieldKind::CreditCardNumber, &mut rng);
        assert!(number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .all(|c| c.is_ascii_digit()));
    }
}
