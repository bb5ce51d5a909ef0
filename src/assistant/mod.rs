
pub const FRAUD_RESPONSE: &str = "Fraud increases during rapid adoption; policy must pair growth with cyber literacy.";
pub const VISION_2047_RESPONSE: &str = "Viksit Bharat 2047 requires inclusive digital infrastructure across all states.";
pub const CONCENTRATION_RESPONSE: &str = "High concentration shows uneven regional digital readiness.";
pub const FALLBACK_RESPONSE: &str = "Ask about fraud, growth, inclusion, or long-term digital policy.";

/// Triggers in priority order; the first one contained in the query answers it.
const RESPONSES: [(&str, &str); 3] = [
    ("fraud", FRAUD_RESPONSE),
    ("2047", VISION_2047_RESPONSE),
    ("concentration", CONCENTRATION_RESPONSE),
];

/// Answers a policy question with a canned response. Never fails; queries with
/// no known trigger, including empty ones, get the fallback prompt.
pub fn resolve(query: &str) -> &'static str {
    let query = query.to_lowercase();

    RESPONSES.iter()
        .find(|(trigger, _)| query.contains(*trigger))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK_RESPONSE)
}
