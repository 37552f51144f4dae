//! Line-type taxonomy for classified phone numbers.

use std::fmt;

/// Human-readable classification of a number's service category.
///
/// `FixedLineOrMobile` is the one ambiguous category: numbering plans such
/// as the North American one cannot distinguish fixed lines from mobiles by
/// digits alone, so the variant carries the carrier name whenever a carrier
/// lookup was able to narrow it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    Mobile,
    FixedLine,
    FixedLineOrMobile { carrier: Option<String> },
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

impl LineType {
    /// Render the display label used in reports and exports.
    pub fn label(&self) -> String {
        match self {
            Self::Mobile => "Mobile".to_string(),
            Self::FixedLine => "Fixed Line".to_string(),
            Self::FixedLineOrMobile { carrier: Some(name) } => {
                format!("Fixed Line or Mobile (Carrier: {})", name)
            }
            Self::FixedLineOrMobile { carrier: None } => "Fixed Line or Mobile".to_string(),
            Self::TollFree => "Toll Free".to_string(),
            Self::PremiumRate => "Premium Rate".to_string(),
            Self::SharedCost => "Shared Cost".to_string(),
            Self::VoIP => "VoIP".to_string(),
            Self::PersonalNumber => "Personal Number".to_string(),
            Self::Pager => "Pager".to_string(),
            Self::UAN => "UAN".to_string(),
            Self::VoiceMail => "Voicemail".to_string(),
            Self::Unknown => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
