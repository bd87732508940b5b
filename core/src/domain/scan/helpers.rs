use std::sync::LazyLock;

use regex::Regex;

/// Fixed reply for photos that do not contain a readable ingredient list.
pub const UNREADABLE_IMAGE_MESSAGE: &str = "Upload the correct image of ingredients";

pub const DEFAULT_PRODUCT_NAME: &str = "Unnamed Product";

pub const UNKNOWN_RESTAURANT: &str = "Unknown Restaurant";

static INGREDIENTS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients:").expect("static regex"));

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;:]").expect("static regex"));

/// Split OCR output into candidate ingredient strings.
///
/// The first `ingredients:` label is removed, the rest is split on `,` `;`
/// `:`, fragments are trimmed and anything shorter than two characters is
/// dropped.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let text = INGREDIENTS_LABEL.replace(text, "");

    DELIMITERS
        .split(&text)
        .map(str::trim)
        .filter(|item| item.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// A fragment reads like an ingredient when it carries at least one letter.
fn has_alphabetic_content(fragment: &str) -> bool {
    fragment.chars().any(|c| c.is_ascii_alphabetic())
}

/// `false` when nothing usable was extracted: either no fragments at all or
/// only fragments without alphabetic content.
pub fn is_readable_ingredient_list(ingredients: &[String]) -> bool {
    ingredients.iter().any(|i| has_alphabetic_content(i))
}

pub fn product_name_or_default(product_name: Option<String>) -> String {
    product_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())
}

pub fn menu_product_name(restaurant_name: Option<String>) -> String {
    let restaurant = restaurant_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_RESTAURANT.to_string());

    format!("Menu: {}", restaurant)
}
