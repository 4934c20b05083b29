use foodprep_db::table::{MealPlan, Recipe};
use foodprep_shared::MealType;
use sea_query::{Alias, Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

use crate::{DailyNutrition, MealEntry, RecipeSummary, WeeklyNutrition};

#[derive(Debug, FromRow)]
pub struct MealEntryRow {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub date: String,
    #[sqlx(try_from = "String")]
    pub meal_type: MealType,
    pub created_at: u64,
    pub recipe_name: Option<String>,
    pub recipe_calories: Option<u32>,
    pub recipe_prep_time: Option<u32>,
    pub recipe_cook_time: Option<u32>,
}

impl From<MealEntryRow> for MealEntry {
    fn from(row: MealEntryRow) -> Self {
        let recipe = row.recipe_name.map(|name| RecipeSummary {
            id: row.recipe_id.to_owned(),
            name,
            calories: row.recipe_calories.unwrap_or(0),
            prep_time: row.recipe_prep_time.unwrap_or(0),
            cook_time: row.recipe_cook_time.unwrap_or(0),
        });

        MealEntry {
            id: row.id,
            user_id: row.user_id,
            recipe_id: row.recipe_id,
            date: row.date,
            meal_type: row.meal_type,
            created_at: row.created_at,
            label: crate::recipe_label(recipe.as_ref()),
            recipe,
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Owner's entries, optionally on a single date, ordered by day then meal type.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        date: Option<Date>,
    ) -> anyhow::Result<Vec<MealEntry>> {
        let mut statement = select_entries(user_id.into());

        if let Some(date) = date {
            statement.and_where(
                Expr::col((MealPlan::Table, MealPlan::Date)).eq(foodprep_shared::format_date(date)),
            );
        }

        self.fetch_sorted(statement).await
    }

    /// Owner's entries between `start` and `end`, both inclusive.
    pub async fn list_range(
        &self,
        user_id: impl Into<String>,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<MealEntry>> {
        let mut statement = select_entries(user_id.into());
        statement
            .and_where(
                Expr::col((MealPlan::Table, MealPlan::Date))
                    .gte(foodprep_shared::format_date(start)),
            )
            .and_where(
                Expr::col((MealPlan::Table, MealPlan::Date)).lte(foodprep_shared::format_date(end)),
            );

        self.fetch_sorted(statement).await
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<MealEntry>> {
        let id = id.into();
        let mut statement = select_entries(user_id.into());
        statement
            .and_where(Expr::col((MealPlan::Table, MealPlan::Id)).eq(&id))
            .limit(1);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealEntryRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(MealEntry::from))
    }

    pub async fn daily_nutrition(
        &self,
        user_id: impl Into<String>,
        date: Date,
    ) -> anyhow::Result<DailyNutrition> {
        let meals = self.list(user_id, Some(date)).await?;

        Ok(DailyNutrition::new(foodprep_shared::format_date(date), meals))
    }

    /// Calorie totals of the Sunday-to-Saturday week containing `anchor`.
    pub async fn weekly_nutrition(
        &self,
        user_id: impl Into<String>,
        anchor: Date,
    ) -> foodprep_shared::Result<WeeklyNutrition> {
        let (start, end) = foodprep_shared::week_range(anchor)?;
        let meals = self.list_range(user_id, start, end).await?;

        Ok(WeeklyNutrition::new(
            foodprep_shared::format_date(start),
            foodprep_shared::format_date(end),
            &meals,
        ))
    }

    async fn fetch_sorted(&self, statement: SelectStatement) -> anyhow::Result<Vec<MealEntry>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let mut entries = sqlx::query_as_with::<_, MealEntryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(MealEntry::from)
            .collect::<Vec<_>>();

        // Stable: entries of the same day and meal type keep creation order.
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.meal_type.cmp(&b.meal_type)));

        Ok(entries)
    }
}

fn select_entries(user_id: String) -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (MealPlan::Table, MealPlan::Id),
            (MealPlan::Table, MealPlan::UserId),
            (MealPlan::Table, MealPlan::RecipeId),
            (MealPlan::Table, MealPlan::Date),
            (MealPlan::Table, MealPlan::MealType),
            (MealPlan::Table, MealPlan::CreatedAt),
        ])
        .expr_as(
            Expr::col((Recipe::Table, Recipe::Name)),
            Alias::new("recipe_name"),
        )
        .expr_as(
            Expr::col((Recipe::Table, Recipe::Calories)),
            Alias::new("recipe_calories"),
        )
        .expr_as(
            Expr::col((Recipe::Table, Recipe::PrepTime)),
            Alias::new("recipe_prep_time"),
        )
        .expr_as(
            Expr::col((Recipe::Table, Recipe::CookTime)),
            Alias::new("recipe_cook_time"),
        )
        .from(MealPlan::Table)
        .left_join(
            Recipe::Table,
            Expr::col((Recipe::Table, Recipe::Id))
                .equals((MealPlan::Table, MealPlan::RecipeId))
                .and(
                    Expr::col((Recipe::Table, Recipe::UserId))
                        .equals((MealPlan::Table, MealPlan::UserId)),
                ),
        )
        .and_where(Expr::col((MealPlan::Table, MealPlan::UserId)).eq(user_id))
        .order_by((MealPlan::Table, MealPlan::Date), Order::Asc)
        .order_by((MealPlan::Table, MealPlan::CreatedAt), Order::Asc)
        .order_by((MealPlan::Table, MealPlan::Id), Order::Asc)
        .to_owned()
}
