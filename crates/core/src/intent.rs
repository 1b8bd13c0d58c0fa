use crate::models::Intent;

/// Trigger rules in priority order. The first rule with any substring hit
/// wins, so a message mentioning both "food" and "avoid" classifies as
/// `FoodChoices`. Matching is raw substring containment ("foods" matches
/// "food"), not whole-word matching.
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::FoodChoices, &["what to eat", "food"]),
    (Intent::AvoidList, &["avoid", "not eat"]),
    (Intent::Benefits, &["benefit", "why"]),
    (Intent::VitaminD, &["vitamin d", "winter"]),
];

/// Lowercases and trims outer whitespace. Interior whitespace is kept as-is.
/// Absent input normalizes to the empty string so classification falls
/// through to `Intent::Default` instead of erroring.
pub fn normalize_text(input: Option<&str>) -> String {
    input
        .map(|text| text.trim().to_lowercase())
        .unwrap_or_default()
}

/// Classifies normalized text (see [`normalize_text`]) against
/// [`INTENT_RULES`], short-circuiting on the first match.
pub fn classify_intent(text: &str) -> Intent {
    for (intent, triggers) in INTENT_RULES {
        if contains_any(text, triggers) {
            return *intent;
        }
    }

    Intent::Default
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
