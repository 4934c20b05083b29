use foodprep_db::table::MealPlan;
use foodprep_shared::MealType;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::MealEntry;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1))]
    pub recipe_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub meal_type: MealType,
}

impl super::Command {
    /// Plan one of the caller's recipes on a date and meal slot.
    pub async fn create(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<MealEntry> {
        input.validate()?;

        let user_id: String = request_by.into();
        let date = foodprep_shared::parse_date(&input.date)?;
        self.ensure_recipe(&input.recipe_id, &user_id).await?;

        let id = ulid::Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([
                MealPlan::Id,
                MealPlan::UserId,
                MealPlan::RecipeId,
                MealPlan::Date,
                MealPlan::MealType,
                MealPlan::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                user_id.to_owned().into(),
                input.recipe_id.into(),
                foodprep_shared::format_date(date).into(),
                input.meal_type.as_ref().into(),
                foodprep_shared::now_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(user_id = %user_id, meal_plan_id = %id, "meal planned");

        self.load(&id, &user_id).await
    }
}
