use axum::{extract::State, http::StatusCode, response::IntoResponse};
use foodprep_recipe::{CreateInput, Query, RecipeRow, UpdateInput};
use serde_json::json;

use crate::{
    auth::AuthUser,
    error::AppError,
    extract::{Json, Path},
    routes::AppState,
};

pub async fn list(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let recipes = Query(app.pool).list(user_id, None).await?;

    Ok(Json(recipes))
}

pub async fn get(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeRow>, AppError> {
    let Some(recipe) = Query(app.pool).find(id, user_id).await? else {
        return Err(foodprep_shared::Error::NotFound("Recipe not found".to_owned()).into());
    };

    Ok(Json(recipe))
}

pub async fn create(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<CreateInput>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = app.recipe_command.create(input, user_id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn update(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateInput>,
) -> Result<Json<RecipeRow>, AppError> {
    Ok(Json(app.recipe_command.update(id, input, user_id).await?))
}

pub async fn delete(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app.recipe_command.delete(id, user_id).await?;

    Ok(Json(json!({ "message": "Recipe deleted successfully" })))
}
