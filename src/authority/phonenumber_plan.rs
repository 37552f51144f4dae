//! Production numbering-plan authority backed by the `phonenumber` crate.

use phonenumber::metadata::{Descriptor, DATABASE};
use phonenumber::{country, Mode, PhoneNumber};

use super::traits::{NumberingPlan, TypeCode};
use crate::domain::RegionCode;
use crate::error::{AuthorityError, AuthorityResult};

/// [`NumberingPlan`] implementation on top of the `phonenumber` crate, the
/// Rust port of Google's libphonenumber.
///
/// The port ships parsing, validation, and formatting metadata, but not the
/// carrier-name, geocoding, or timezone databases of the upstream project.
/// Carrier and timezone lookups therefore report absence, and
/// `region_description` degrades to the ISO territory code the metadata
/// derives for the number.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhonenumberPlan;

impl PhonenumberPlan {
    pub fn new() -> Self {
        Self
    }

    fn region_hint(region: &RegionCode) -> Option<country::Id> {
        region.as_str().parse().ok()
    }

    /// National significant number as a digit string.
    fn national_digits(number: &PhoneNumber) -> String {
        number.national().to_string()
    }

    /// Length guard plus pattern match against one type descriptor, the
    /// same order of checks the upstream library applies.
    fn matches_descriptor(descriptor: Option<&Descriptor>, national: &str) -> bool {
        let Some(descriptor) = descriptor else {
            return false;
        };
        let lengths = descriptor.possible_length();
        if !lengths.is_empty() && !lengths.iter().any(|&len| len as usize == national.len()) {
            return false;
        }
        descriptor.national_number().is_match(national)
    }
}

impl NumberingPlan for PhonenumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region: &RegionCode) -> AuthorityResult<PhoneNumber> {
        phonenumber::parse(Self::region_hint(region), text)
            .map_err(|e| AuthorityError::Parse(e.to_string()))
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let Some(meta) = number.metadata(&DATABASE) else {
            return false;
        };
        let national = Self::national_digits(number);
        let lengths = meta.descriptors().general().possible_length();
        lengths.is_empty() || lengths.iter().any(|&len| len as usize == national.len())
    }

    fn type_of(&self, number: &PhoneNumber) -> TypeCode {
        let Some(meta) = number.metadata(&DATABASE) else {
            return TypeCode::Unknown;
        };
        let national = Self::national_digits(number);
        let descriptors = meta.descriptors();

        if !Self::matches_descriptor(Some(descriptors.general()), &national) {
            return TypeCode::Unknown;
        }
        if Self::matches_descriptor(descriptors.premium_rate(), &national) {
            return TypeCode::PremiumRate;
        }
        if Self::matches_descriptor(descriptors.toll_free(), &national) {
            return TypeCode::TollFree;
        }
        if Self::matches_descriptor(descriptors.shared_cost(), &national) {
            return TypeCode::SharedCost;
        }
        if Self::matches_descriptor(descriptors.voip(), &national) {
            return TypeCode::VoIP;
        }
        if Self::matches_descriptor(descriptors.personal_number(), &national) {
            return TypeCode::PersonalNumber;
        }
        if Self::matches_descriptor(descriptors.pager(), &national) {
            return TypeCode::Pager;
        }
        if Self::matches_descriptor(descriptors.uan(), &national) {
            return TypeCode::UAN;
        }
        if Self::matches_descriptor(descriptors.voicemail(), &national) {
            return TypeCode::VoiceMail;
        }

        // Plans where the fixed-line and mobile patterns overlap (e.g. the
        // NANPA regions) cannot tell the two apart.
        let is_fixed = Self::matches_descriptor(descriptors.fixed_line(), &national);
        let is_mobile = Self::matches_descriptor(descriptors.mobile(), &national);
        match (is_fixed, is_mobile) {
            (true, true) => TypeCode::FixedLineOrMobile,
            (true, false) => TypeCode::FixedLine,
            (false, true) => TypeCode::Mobile,
            (false, false) => TypeCode::Unknown,
        }
    }

    fn format_international(&self, number: &PhoneNumber) -> String {
        phonenumber::format(number).mode(Mode::International).to_string()
    }

    fn carrier_name(&self, _number: &PhoneNumber, _locale: &str) -> Option<String> {
        // The Rust port ships no carrier database.
        None
    }

    fn region_description(&self, number: &PhoneNumber, _locale: &str) -> Option<String> {
        // No geocoder database in the port; the ISO territory code is the
        // coarsest description the metadata supports.
        number.country().id().map(|id| format!("{:?}", id))
    }

    fn timezones(&self, _number: &PhoneNumber) -> Vec<String> {
        // The Rust port ships no timezone database.
        Vec::new()
    }
}
