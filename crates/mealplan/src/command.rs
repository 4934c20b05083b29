use std::ops::Deref;

use foodprep_shared::State;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub(crate) async fn ensure_recipe(
        &self,
        recipe_id: &str,
        user_id: &str,
    ) -> foodprep_shared::Result<()> {
        let recipe = foodprep_recipe::Query(self.read_db.clone())
            .find(recipe_id, user_id)
            .await?;

        if recipe.is_none() {
            foodprep_shared::not_found!("Recipe not found");
        }

        Ok(())
    }

    pub(crate) async fn load(
        &self,
        id: &str,
        user_id: &str,
    ) -> foodprep_shared::Result<crate::MealEntry> {
        let Some(entry) = crate::Query(self.write_db.clone()).find(id, user_id).await? else {
            foodprep_shared::not_found!("Meal plan not found");
        };

        Ok(entry)
    }
}
