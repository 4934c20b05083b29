use std::{path::PathBuf, str::FromStr};

use foodprep_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodprep_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn recipe_input(name: impl Into<String>, ingredients: &str) -> foodprep_recipe::CreateInput {
    foodprep_recipe::CreateInput {
        name: name.into(),
        ingredients: ingredients.to_owned(),
        calories: 300,
        ..Default::default()
    }
}
