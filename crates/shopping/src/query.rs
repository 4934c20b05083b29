use foodprep_db::table::ShoppingItem;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::StatusFilter;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ShoppingItemRow {
    pub id: String,
    pub user_id: String,
    pub item: String,
    pub completed: bool,
    pub created_at: u64,
}

pub(crate) const COLUMNS: [ShoppingItem; 5] = [
    ShoppingItem::Id,
    ShoppingItem::UserId,
    ShoppingItem::Item,
    ShoppingItem::Completed,
    ShoppingItem::CreatedAt,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Owner's items, newest first.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        status: StatusFilter,
    ) -> anyhow::Result<Vec<ShoppingItemRow>> {
        let user_id = user_id.into();
        let mut statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .order_by(ShoppingItem::CreatedAt, Order::Desc)
            .order_by(ShoppingItem::Id, Order::Desc)
            .to_owned();

        if let Some(completed) = status.completed() {
            statement.and_where(Expr::col(ShoppingItem::Completed).eq(completed));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> anyhow::Result<Option<ShoppingItemRow>> {
        let id = id.into();
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Id).eq(&id))
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn count_pending(&self, user_id: impl Into<String>) -> anyhow::Result<u64> {
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(ShoppingItem::Id)))
            .from(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .and_where(Expr::col(ShoppingItem::Completed).eq(false))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total.try_into().unwrap_or(0))
    }
}
