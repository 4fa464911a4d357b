//! Field tables for each entity type.
//!
//! Each entity is a static list of [`FieldSpec`]s: the column name, the kind
//! of value generated for it and the probability of that value being dirty.
//! Columns are emitted in table order.

use std::fmt;
use std::str::FromStr;

use crate::dirty::DEFAULT_DIRTY_FACTOR;
use crate::generator::GeneratorError;
use crate::generators::FieldKind;

/// One column of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub dirty_factor: f64,
}

const fn field(name: &'static str, kind: FieldKind, dirty_factor: f64) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        dirty_factor,
    }
}

pub const PERSON_FIELDS: [FieldSpec; 16] = [
    field("first_name", FieldKind::FirstName, 0.1),
    field("last_name", FieldKind::LastName, 0.1),
    field("street_address", FieldKind::StreetAddress, DEFAULT_DIRTY_FACTOR),
    field("city", FieldKind::City, DEFAULT_DIRTY_FACTOR),
    field("province", FieldKind::ProvinceAbbr, DEFAULT_DIRTY_FACTOR),
    field("postal_code", FieldKind::PostalCode, DEFAULT_DIRTY_FACTOR),
    field("country", FieldKind::Country, 0.15),
    field("email", FieldKind::Email, DEFAULT_DIRTY_FACTOR),
    field("phone_number", FieldKind::PhoneNumber, 0.3),
    field("job", FieldKind::Job, 0.4),
    field("ssn", FieldKind::Ssn, 0.5),
    field("company", FieldKind::Company, DEFAULT_DIRTY_FACTOR),
    field("credit_card_number", FieldKind::CreditCardNumber, 0.0),
    field("credit_card_provider", FieldKind::CreditCardProvider, DEFAULT_DIRTY_FACTOR),
    field("credit_card_expire", FieldKind::CreditCardExpire, DEFAULT_DIRTY_FACTOR),
    field(
        "credit_card_security_code",
        FieldKind::CreditCardSecurityCode,
        DEFAULT_DIRTY_FACTOR,
    ),
];

pub const COMPANY_FIELDS: [FieldSpec; 13] = [
    field("company", FieldKind::Company, DEFAULT_DIRTY_FACTOR),
    field("industry", FieldKind::CompanySuffix, DEFAULT_DIRTY_FACTOR),
    field("catch_phrase", FieldKind::CatchPhrase, DEFAULT_DIRTY_FACTOR),
    field("bs", FieldKind::Bs, DEFAULT_DIRTY_FACTOR),
    field("logo", FieldKind::ImageUrl, DEFAULT_DIRTY_FACTOR),
    field("street_address", FieldKind::StreetAddress, DEFAULT_DIRTY_FACTOR),
    field("city", FieldKind::City, DEFAULT_DIRTY_FACTOR),
    field("province", FieldKind::ProvinceAbbr, DEFAULT_DIRTY_FACTOR),
    field("postal_code", FieldKind::PostalCode, DEFAULT_DIRTY_FACTOR),
    field("country", FieldKind::Country, 0.15),
    field("email", FieldKind::Email, DEFAULT_DIRTY_FACTOR),
    field("phone_number", FieldKind::PhoneNumber, 0.3),
    field("website", FieldKind::Url, DEFAULT_DIRTY_FACTOR),
];

/// Type of record to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Company,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Person, EntityKind::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Company => "company",
        }
    }

    /// Columns generated for this entity, in output order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Person => &PERSON_FIELDS,
            EntityKind::Company => &COMPANY_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeneratorError::UnsupportedEntity(s.to_string()))
    }
}
