use axum::extract::State;
use foodprep_mealplan::{DailyNutrition, Query as MealPlanQuery, WeeklyNutrition};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::AppError,
    extract::{Json, Query},
    routes::AppState,
};

#[derive(Deserialize)]
pub struct DailyParams {
    date: Option<String>,
}

/// GET /api/nutrition/daily?date=YYYY-MM-DD, today when absent
pub async fn daily(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Query(params): Query<DailyParams>,
) -> Result<Json<DailyNutrition>, AppError> {
    let date = match params.date {
        Some(date) => foodprep_shared::parse_date(date)?,
        None => foodprep_shared::today(),
    };

    Ok(Json(
        MealPlanQuery(app.pool).daily_nutrition(user_id, date).await?,
    ))
}

#[derive(Deserialize)]
pub struct WeeklyParams {
    start_date: Option<String>,
}

/// GET /api/nutrition/weekly?start_date=YYYY-MM-DD
///
/// Any day of the week works as anchor, the range is snapped to Sunday..Saturday.
pub async fn weekly(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Query(params): Query<WeeklyParams>,
) -> Result<Json<WeeklyNutrition>, AppError> {
    let anchor = match params.start_date {
        Some(date) => foodprep_shared::parse_date(date)?,
        None => foodprep_shared::today(),
    };

    Ok(Json(
        MealPlanQuery(app.pool).weekly_nutrition(user_id, anchor).await?,
    ))
}
