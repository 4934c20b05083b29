use std::ops::Deref;

use foodprep_db::table::ShoppingItem;
use foodprep_shared::State;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::ShoppingItemRow;

mod clear;
mod create;
mod delete;
mod generate;
mod update;

pub use create::CreateInput;
pub use generate::{GenerateInput, GenerateOutput, MAX_RECIPES};
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

    /// Insert `item` for the owner, or put the existing one back to pending.
    pub async fn upsert_item(
        &self,
        item: impl Into<String>,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<ShoppingItemRow> {
        let item: String = item.into();
        let user_id: String = request_by.into();
        let statement = Query::insert()
            .into_table(ShoppingItem::Table)
            .columns(crate::query::COLUMNS)
            .values_panic([
                ulid::Ulid::new().to_string().into(),
                user_id.into(),
                item.into(),
                false.into(),
                foodprep_shared::now_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([ShoppingItem::UserId, ShoppingItem::Item])
                    .update_column(ShoppingItem::Completed)
                    .to_owned(),
            )
            .returning_all()
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_one(&self.write_db)
            .await?)
    }
}
