use foodprep_db::table::Recipe;
use foodprep_shared::RecipeCategory;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder, Value};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::RecipeRow;

/// Partial update, absent fields are left untouched.
#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct UpdateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    #[validate(range(min = 1, message = "Must be greater than 0"))]
    pub servings: Option<u32>,
    pub calories: Option<u32>,
    pub category: Option<RecipeCategory>,
}

impl UpdateInput {
    fn changes(self) -> Vec<(Recipe, Value)> {
        let mut changes: Vec<(Recipe, Value)> = vec![];

        if let Some(name) = self.name {
            changes.push((Recipe::Name, name.into()));
        }
        if let Some(description) = self.description {
            changes.push((Recipe::Description, description.into()));
        }
        if let Some(ingredients) = self.ingredients {
            changes.push((Recipe::Ingredients, ingredients.into()));
        }
        if let Some(instructions) = self.instructions {
            changes.push((Recipe::Instructions, instructions.into()));
        }
        if let Some(prep_time) = self.prep_time {
            changes.push((Recipe::PrepTime, prep_time.into()));
        }
        if let Some(cook_time) = self.cook_time {
            changes.push((Recipe::CookTime, cook_time.into()));
        }
        if let Some(servings) = self.servings {
            changes.push((Recipe::Servings, servings.into()));
        }
        if let Some(calories) = self.calories {
            changes.push((Recipe::Calories, calories.into()));
        }
        if let Some(category) = self.category {
            changes.push((Recipe::Category, category.as_ref().into()));
        }

        changes
    }
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<RecipeRow> {
        let input = UpdateInput {
            name: input.name.map(|name| name.trim().to_owned()),
            ..input
        };
        input.validate()?;

        let changes = input.changes();
        if changes.is_empty() {
            foodprep_shared::user!("nothing to update");
        }

        let id = id.into();
        let user_id: String = request_by.into();
        let mut statement = Query::update();
        statement.table(Recipe::Table);

        for (column, value) in changes {
            statement.value(column, value);
        }

        statement
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .returning_all();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(recipe) = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?
        else {
            foodprep_shared::not_found!("Recipe not found");
        };

        Ok(recipe)
    }
}
