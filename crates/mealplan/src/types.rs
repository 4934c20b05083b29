use foodprep_shared::MealType;
use serde::Serialize;

pub const UNKNOWN_RECIPE_LABEL: &str = "Unknown recipe";

/// Recipe fields shown next to a planned meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub prep_time: u32,
    pub cook_time: u32,
}

/// Display label of a planned meal, with a fallback for dangling references.
pub fn recipe_label(recipe: Option<&RecipeSummary>) -> String {
    recipe
        .map(|r| r.name.to_owned())
        .unwrap_or_else(|| UNKNOWN_RECIPE_LABEL.to_owned())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealEntry {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub date: String,
    pub meal_type: MealType,
    pub created_at: u64,
    /// `None` once the referenced recipe has been deleted.
    pub recipe: Option<RecipeSummary>,
    pub label: String,
}

impl MealEntry {
    pub fn calories(&self) -> u32 {
        self.recipe.as_ref().map(|r| r.calories).unwrap_or(0)
    }

    pub fn is_dangling(&self) -> bool {
        self.recipe.is_none()
    }
}
