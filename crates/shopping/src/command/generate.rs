use serde::Serialize;
use time::Date;

use crate::ShoppingItemRow;

/// Upper bound on distinct recipes per generation; each id is one bound
/// SQL variable.
pub const MAX_RECIPES: usize = 500;

#[derive(Debug, Clone)]
pub enum GenerateInput {
    /// Every recipe planned by the owner on that date.
    Date(Date),
    Recipes(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub count: usize,
    pub items: Vec<ShoppingItemRow>,
}

impl super::Command {
    /// Turn the ingredient lines of the selected recipes into shopping items.
    ///
    /// Lines are deduplicated by exact text across recipes, then each one is
    /// upserted on its own with `completed = false`. Nothing is written when
    /// no recipe resolves.
    pub async fn generate(
        &self,
        input: GenerateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<GenerateOutput> {
        let user_id: String = request_by.into();

        let mut recipe_ids = match input {
            GenerateInput::Date(date) => {
                let entries = foodprep_mealplan::Query(self.read_db.clone())
                    .list(&user_id, Some(date))
                    .await?;

                if entries.is_empty() {
                    return Err(foodprep_shared::Error::NothingPlanned);
                }

                entries
                    .into_iter()
                    .filter(|entry| !entry.is_dangling())
                    .map(|entry| entry.recipe_id)
                    .collect::<Vec<_>>()
            }
            GenerateInput::Recipes(ids) => ids,
        };

        let mut seen = std::collections::HashSet::new();
        recipe_ids.retain(|id| seen.insert(id.to_owned()));

        if recipe_ids.len() > MAX_RECIPES {
            foodprep_shared::user!("At most {MAX_RECIPES} recipes per shopping list");
        }

        let recipes = foodprep_recipe::Query(self.read_db.clone())
            .find_ingredients(&recipe_ids, &user_id)
            .await?;

        if recipes.is_empty() {
            return Err(foodprep_shared::Error::NothingPlanned);
        }

        let lines = crate::collect_items(recipes.iter().map(|(_, ingredients)| ingredients.as_str()));
        let mut items = Vec::with_capacity(lines.len());

        for line in lines {
            items.push(self.upsert_item(line, &user_id).await?);
        }

        tracing::info!(
            user_id = %user_id,
            recipes = recipes.len(),
            items = items.len(),
            "shopping list generated"
        );

        Ok(GenerateOutput {
            count: items.len(),
            items,
        })
    }
}
