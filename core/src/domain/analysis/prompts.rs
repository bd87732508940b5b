use crate::domain::analysis::entities::MealType;

/// Prompt used when at least one allergy matched the ingredient list.
pub fn allergy_risk_prompt(matched_allergies: &[String], ingredients: &[String]) -> String {
    format!(
        "If no ingredients can be found in the text below, reply only with: \
Upload the correct image of ingredients.\n\
I have allergies to: {}. I found these ingredients in a food product: {}.\n\
Please explain the potential risks, the symptoms I might experience, and what \
medications or treatments I should consider. Also suggest alternatives to this food.",
        matched_allergies.join(", "),
        ingredients.join(", ")
    )
}

/// Prompt used when none of the user's allergies matched.
pub fn ingredient_safety_prompt(allergies: &[String], ingredients: &[String]) -> String {
    format!(
        "I have allergies to: {}. I found these ingredients in a food product: {}.\n\
Based on these ingredients, are they safe for me to consume? Please provide a brief analysis.",
        allergies.join(", "),
        ingredients.join(", ")
    )
}

pub fn meal_recommendations_prompt(
    allergies: &[String],
    meal_type: MealType,
    cuisine: Option<&str>,
) -> String {
    let cuisine = cuisine
        .map(|c| format!(" from {} cuisine", c))
        .unwrap_or_default();

    format!(
        "I have allergies to: {}.\n\
Please suggest 5 {} recipes{} that are safe for me to eat.\n\
For each recipe, provide:\n\
1. Recipe name\n\
2. Brief description\n\
3. Key ingredients (that are safe for my allergies)\n\
4. Basic preparation steps\n\
5. Any specific allergy-related notes or substitutions\n\n\
Format the response in a clear, structured way.",
        allergies.join(", "),
        meal_type.as_str().to_lowercase(),
        cuisine
    )
}

pub fn menu_analysis_prompt(menu_text: &str, allergies: &[String]) -> String {
    format!(
        "I have allergies to: {}.\n\
Here is a restaurant menu:\n\n\
{}\n\n\
Please analyze each menu item and:\n\
1. Identify items that are likely safe for me to eat\n\
2. Flag items that might contain my allergens\n\
3. Suggest modifications to make risky items safe (if possible)\n\
4. Provide general advice for dining at this restaurant\n\n\
Format the response in clear sections.",
        allergies.join(", "),
        menu_text
    )
}
