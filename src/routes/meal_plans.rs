use axum::{extract::State, http::StatusCode, response::IntoResponse};
use foodprep_mealplan::{CreateInput, MealEntry, Query as MealPlanQuery, UpdateInput};
use serde::Deserialize;
use serde_json::json;

use crate::{
    auth::AuthUser,
    error::AppError,
    extract::{Json, Path, Query},
    routes::AppState,
};

#[derive(Deserialize)]
pub struct ListParams {
    date: Option<String>,
}

pub async fn list(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MealEntry>>, AppError> {
    let date = params
        .date
        .map(foodprep_shared::parse_date)
        .transpose()?;

    Ok(Json(MealPlanQuery(app.pool).list(user_id, date).await?))
}

pub async fn create(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<CreateInput>,
) -> Result<impl IntoResponse, AppError> {
    let entry = app.meal_plan_command.create(input, user_id).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateInput>,
) -> Result<Json<MealEntry>, AppError> {
    Ok(Json(app.meal_plan_command.update(id, input, user_id).await?))
}

pub async fn delete(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app.meal_plan_command.delete(id, user_id).await?;

    Ok(Json(json!({ "message": "Meal plan deleted successfully" })))
}
