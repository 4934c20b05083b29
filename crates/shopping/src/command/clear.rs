use foodprep_db::table::ShoppingItem;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Remove every completed item of the owner, returns how many went away.
    pub async fn clear_completed(
        &self,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<u64> {
        let user_id: String = request_by.into();
        let statement = Query::delete()
            .from_table(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .and_where(Expr::col(ShoppingItem::Completed).eq(true))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(result.rows_affected())
    }
}
