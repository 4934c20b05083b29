/// Split a recipe's ingredients block into its ingredient lines.
///
/// Lines are separated by `\n` and trimmed; blank lines are dropped and the
/// remaining order is kept. No further normalisation happens, so
/// `"2 eggs"` and `"eggs"` stay two distinct ingredients.
pub fn ingredient_lines(ingredients: &str) -> impl Iterator<Item = &str> {
    ingredients
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

pub fn extract_ingredients(ingredients: &str) -> Vec<String> {
    ingredient_lines(ingredients).map(str::to_owned).collect()
}
