use foodprep_db::table::ShoppingItem;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> foodprep_shared::Result<()> {
        let id = id.into();
        let user_id: String = request_by.into();
        let statement = Query::delete()
            .from_table(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Id).eq(&id))
            .and_where(Expr::col(ShoppingItem::UserId).eq(&user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodprep_shared::not_found!("Shopping item not found");
        }

        Ok(())
    }
}
