use foodprep_db::table::MealPlan;
use foodprep_shared::MealType;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder, Value};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;

use crate::MealEntry;

/// Partial update, absent fields are left untouched.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateInput {
    pub recipe_id: Option<String>,
    pub date: Option<String>,
    pub meal_type: Option<MealType>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<MealEntry> {
        let id = id.into();
        let user_id: String = request_by.into();
        let mut changes: Vec<(MealPlan, Value)> = vec![];

        if let Some(recipe_id) = input.recipe_id {
            self.ensure_recipe(&recipe_id, &user_id).await?;
            changes.push((MealPlan::RecipeId, recipe_id.into()));
        }
        if let Some(date) = input.date {
            let date = foodprep_shared::parse_date(date)?;
            changes.push((MealPlan::Date, foodprep_shared::format_date(date).into()));
        }
        if let Some(meal_type) = input.meal_type {
            changes.push((MealPlan::MealType, meal_type.as_ref().into()));
        }

        if changes.is_empty() {
            foodprep_shared::user!("nothing to update");
        }

        let mut statement = Query::update();
        statement.table(MealPlan::Table);

        for (column, value) in changes {
            statement.value(column, value);
        }

        statement
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .and_where(Expr::col(MealPlan::UserId).eq(&user_id));

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodprep_shared::not_found!("Meal plan not found");
        }

        self.load(&id, &user_id).await
    }
}
