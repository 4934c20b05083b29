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

pub async fn create_recipe(
    state: &State,
    name: &str,
    ingredients: &str,
    user_id: &str,
) -> anyhow::Result<String> {
    let recipe = foodprep_recipe::Command::new(state.clone())
        .create(
            foodprep_recipe::CreateInput {
                name: name.to_owned(),
                ingredients: ingredients.to_owned(),
                ..Default::default()
            },
            user_id,
        )
        .await?;

    Ok(recipe.id)
}

pub async fn plan(
    state: &State,
    recipe_id: &str,
    date: &str,
    user_id: &str,
) -> anyhow::Result<()> {
    foodprep_mealplan::Command::new(state.clone())
        .create(
            foodprep_mealplan::CreateInput {
                recipe_id: recipe_id.to_owned(),
                date: date.to_owned(),
                meal_type: foodprep_mealplan::MealType::Dinner,
            },
            user_id,
        )
        .await?;

    Ok(())
}
