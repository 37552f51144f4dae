//! Heuristic repair of under-specified phone numbers.

/// Repair `raw` into a form the numbering-plan authority can parse.
///
/// The authority needs a leading `+` (or an explicit region) to
/// disambiguate national-format digits, so numbers without one get a
/// country calling code prefixed:
///
/// - input already starting with `+` is returned unchanged
/// - input starting with `1` is assumed to be a North American number that
///   already carries its country-code digit, so only `+` is prefixed
/// - anything else is prefixed with `+1`
///
/// The `+1` fallback deliberately ignores the caller-selected default
/// region; the region still reaches the authority's parse step separately
/// and affects interpretation there. This asymmetry matches the behavior
/// interactive callers have come to rely on.
///
/// This is a best-effort repair, not a validity guarantee: empty input
/// becomes `"+1"` and is left for the parser to reject.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with('+') {
        raw.to_string()
    } else if raw.starts_with('1') {
        format!("+{}", raw)
    } else {
        format!("+1{}", raw)
    }
}
