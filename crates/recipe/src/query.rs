use std::collections::HashMap;

use foodprep_db::table::Recipe;
use foodprep_shared::RecipeCategory;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub calories: u32,
    #[sqlx(try_from = "String")]
    pub category: RecipeCategory,
    pub created_at: u64,
}

#[derive(Debug, FromRow)]
struct IngredientsRow {
    id: String,
    ingredients: String,
}

pub(crate) const COLUMNS: [Recipe; 12] = [
    Recipe::Id,
    Recipe::UserId,
    Recipe::Name,
    Recipe::Description,
    Recipe::Ingredients,
    Recipe::Instructions,
    Recipe::PrepTime,
    Recipe::CookTime,
    Recipe::Servings,
    Recipe::Calories,
    Recipe::Category,
    Recipe::CreatedAt,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Owner's recipes, newest first.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<RecipeRow>> {
        let user_id = user_id.into();
        let mut statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by(Recipe::Id, Order::Desc)
            .to_owned();

        if let Some(limit) = limit {
            statement.limit(limit);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<RecipeRow>> {
        let id = id.into();
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn count(&self, user_id: impl Into<String>) -> anyhow::Result<u64> {
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total.try_into().unwrap_or(0))
    }

    /// Ingredients blocks of the owner's recipes among `ids`, in the order of
    /// `ids`. Ids that are unknown or owned by someone else are skipped.
    pub async fn find_ingredients(
        &self,
        ids: &[String],
        user_id: impl Into<String>,
    ) -> anyhow::Result<Vec<(String, String)>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .columns([Recipe::Id, Recipe::Ingredients])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .and_where(Expr::col(Recipe::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let mut rows = sqlx::query_as_with::<_, IngredientsRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|row| (row.id, row.ingredients))
            .collect::<HashMap<_, _>>();

        Ok(ids
            .iter()
            .filter_map(|id| rows.remove(id).map(|ingredients| (id.to_owned(), ingredients)))
            .collect())
    }
}
