use foodprep_db::table::ShoppingItem;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder, Value};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;

use crate::ShoppingItemRow;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateInput {
    pub item: Option<String>,
    pub completed: Option<bool>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<ShoppingItemRow> {
        let id = id.into();
        let user_id: String = request_by.into();
        let mut changes: Vec<(ShoppingItem, Value)> = vec![];

        if let Some(item) = input.item {
            let item = item.trim().to_owned();
            if item.is_empty() {
                foodprep_shared::user!("item must not be empty");
            }
            changes.push((ShoppingItem::Item, item.into()));
        }
        if let Some(completed) = input.completed {
            changes.push((ShoppingItem::Completed, completed.into()));
        }

        if changes.is_empty() {
            foodprep_shared::user!("nothing to update");
        }

        let mut statement = Query::update();
        statement.table(ShoppingItem::Table);

        for (column, value) in changes {
            statement.value(column, value);
        }

        statement
            .and_where(Expr::col(ShoppingItem::Id).eq(&id))
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .returning_all();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = match sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await
        {
            Ok(row) => row,
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                foodprep_shared::user!("Item already on the shopping list");
            }
            Err(err) => return Err(err.into()),
        };

        let Some(row) = row else {
            foodprep_shared::not_found!("Shopping item not found");
        };

        Ok(row)
    }
}
