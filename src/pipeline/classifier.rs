//! Line-type classification.

use crate::authority::{NumberingPlan, TypeCode};
use crate::domain::LineType;

/// Map the authority's coarse [`TypeCode`] onto the display taxonomy.
///
/// The match is exhaustive, so a new code cannot be added without choosing
/// a label here. `FixedLineOrMobile` is the one refinement: a carrier
/// lookup disambiguates the label whenever the authority carries carrier
/// data for the number.
pub fn classify<A: NumberingPlan>(
    authority: &A,
    code: TypeCode,
    number: &A::Number,
    locale: &str,
) -> LineType {
    match code {
        TypeCode::Mobile => LineType::Mobile,
        TypeCode::FixedLine => LineType::FixedLine,
        TypeCode::FixedLineOrMobile => LineType::FixedLineOrMobile {
            carrier: authority.carrier_name(number, locale),
        },
        TypeCode::TollFree => LineType::TollFree,
        TypeCode::PremiumRate => LineType::PremiumRate,
        TypeCode::SharedCost => LineType::SharedCost,
        TypeCode::VoIP => LineType::VoIP,
        TypeCode::PersonalNumber => LineType::PersonalNumber,
        TypeCode::Pager => LineType::Pager,
        TypeCode::UAN => LineType::UAN,
        TypeCode::VoiceMail => LineType::VoiceMail,
        TypeCode::Unknown => LineType::Unknown,
    }
}
