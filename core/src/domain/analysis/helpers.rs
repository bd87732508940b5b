/// Allergy names found as a case-insensitive substring of at least one
/// ingredient.
///
/// Output keeps the order of `allergies`; an allergy is reported once no
/// matter how many ingredients contain it.
pub fn find_matched_allergies(ingredients: &[String], allergies: &[String]) -> Vec<String> {
    let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

    allergies
        .iter()
        .filter(|allergy| {
            let needle = allergy.to_lowercase();
            lowered.iter().any(|ingredient| ingredient.contains(&needle))
        })
        .cloned()
        .collect()
}
