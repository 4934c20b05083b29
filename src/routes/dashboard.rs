use axum::extract::State;
use foodprep_mealplan::MealEntry;
use foodprep_recipe::RecipeRow;
use foodprep_shopping::Query as ShoppingQuery;
use serde::Serialize;

use crate::{auth::AuthUser, error::AppError, extract::Json, routes::AppState};

const RECENT_RECIPES: u64 = 5;

#[derive(Serialize)]
pub struct Stats {
    pub total_recipes: u64,
    pub planned_meals: usize,
    pub shopping_items: u64,
    pub weekly_calories: u32,
}

#[derive(Serialize)]
pub struct DashboardStats {
    pub stats: Stats,
    pub recent_recipes: Vec<RecipeRow>,
    pub todays_meals: Vec<MealEntry>,
}

pub async fn stats(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let recipes = foodprep_recipe::Query(app.pool.clone());
    let meal_plans = foodprep_mealplan::Query(app.pool.clone());
    let today = foodprep_shared::today();

    let total_recipes = recipes.count(&user_id).await?;
    let recent_recipes = recipes.list(&user_id, Some(RECENT_RECIPES)).await?;
    let todays_meals = meal_plans.list(&user_id, Some(today)).await?;
    let shopping_items = ShoppingQuery(app.pool).count_pending(&user_id).await?;
    let week = meal_plans.weekly_nutrition(&user_id, today).await?;

    Ok(Json(DashboardStats {
        stats: Stats {
            total_recipes,
            planned_meals: todays_meals.len(),
            shopping_items,
            weekly_calories: week
                .daily_totals
                .values()
                .fold(0u32, |acc, v| acc.saturating_add(*v)),
        },
        recent_recipes,
        todays_meals,
    }))
}
