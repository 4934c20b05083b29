use foodprep_db::table::Recipe;
use foodprep_shared::RecipeCategory;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::RecipeRow;

fn default_servings() -> u32 {
    1
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default = "default_servings")]
    #[validate(range(min = 1, message = "Must be greater than 0"))]
    pub servings: u32,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub category: RecipeCategory,
}

impl Default for CreateInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: default_servings(),
            calories: 0,
            category: RecipeCategory::default(),
        }
    }
}

impl super::Command {
    pub async fn create(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<RecipeRow> {
        let input = CreateInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let user_id: String = request_by.into();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns(crate::query::COLUMNS)
            .values_panic([
                id.into(),
                user_id.into(),
                input.name.into(),
                input.description.into(),
                input.ingredients.into(),
                input.instructions.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                input.servings.into(),
                input.calories.into(),
                input.category.as_ref().into(),
                foodprep_shared::now_timestamp().into(),
            ])
            .returning_all()
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let recipe = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_one(&self.write_db)
            .await?;

        tracing::debug!(user_id = %recipe.user_id, recipe_id = %recipe.id, "recipe created");

        Ok(recipe)
    }
}
