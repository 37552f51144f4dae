//! Numbering-plan authority contract.

use crate::domain::RegionCode;
use crate::error::AuthorityResult;

/// Coarse number classification reported by a numbering plan.
///
/// Mirrors the taxonomy of Google's libphonenumber. `FixedLineOrMobile`
/// covers regions (e.g. the USA) where fixed-line and mobile numbers are
/// indistinguishable by their digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    VoIP,
    PersonalNumber,
    Pager,
    UAN,
    VoiceMail,
    Unknown,
}

impl TypeCode {
    /// Every variant of the taxonomy, in classification precedence order.
    pub const ALL: [TypeCode; 12] = [
        TypeCode::PremiumRate,
        TypeCode::TollFree,
        TypeCode::SharedCost,
        TypeCode::VoIP,
        TypeCode::PersonalNumber,
        TypeCode::Pager,
        TypeCode::UAN,
        TypeCode::VoiceMail,
        TypeCode::FixedLineOrMobile,
        TypeCode::FixedLine,
        TypeCode::Mobile,
        TypeCode::Unknown,
    ];
}

/// Authority over country-specific numbering rules.
///
/// Provides abstraction over parsing, validity, classification, and
/// metadata lookups, enabling different implementations (the production
/// `phonenumber`-backed plan, scripted test doubles).
pub trait NumberingPlan: Send + Sync {
    /// The authority's structured representation of a parsed number.
    /// `Debug` so diagnostics can log what the parser actually produced.
    type Number: std::fmt::Debug;

    /// Parse `text` into a structured number. `region` is the fallback
    /// country hint for interpreting national-format digits.
    fn parse(&self, text: &str, region: &RegionCode) -> AuthorityResult<Self::Number>;

    /// Whether the number matches a real assigned numbering-plan range.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Whether the number is structurally plausible (length/prefix) for its
    /// region, a weaker check than [`NumberingPlan::is_valid`].
    fn is_possible(&self, number: &Self::Number) -> bool;

    /// Coarse classification from the numbering-plan metadata.
    fn type_of(&self, number: &Self::Number) -> TypeCode;

    /// International display form of the number.
    fn format_international(&self, number: &Self::Number) -> String;

    /// Carrier name for the number, when the authority carries carrier data.
    fn carrier_name(&self, number: &Self::Number, locale: &str) -> Option<String>;

    /// Geographic description for the number.
    fn region_description(&self, number: &Self::Number, locale: &str) -> Option<String>;

    /// IANA-style time zone names associated with the number. May be empty.
    fn timezones(&self, number: &Self::Number) -> Vec<String>;
}
