use axum::{extract::State, http::StatusCode, response::IntoResponse};
use foodprep_shopping::{
    CreateInput, GenerateInput, Query as ShoppingQuery, ShoppingItemRow, StatusFilter,
    UpdateInput,
};
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
    #[serde(default)]
    status: StatusFilter,
}

pub async fn list(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ShoppingItemRow>>, AppError> {
    Ok(Json(
        ShoppingQuery(app.pool).list(user_id, params.status).await?,
    ))
}

pub async fn create(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Json(input): Json<CreateInput>,
) -> Result<impl IntoResponse, AppError> {
    let item = app.shopping_command.create(input, user_id).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateInput>,
) -> Result<Json<ShoppingItemRow>, AppError> {
    Ok(Json(app.shopping_command.update(id, input, user_id).await?))
}

pub async fn delete(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app.shopping_command.delete(id, user_id).await?;

    Ok(Json(json!({ "message": "Item deleted successfully" })))
}

pub async fn clear_completed(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let count = app.shopping_command.clear_completed(user_id).await?;

    Ok(Json(json!({
        "message": format!("Removed {count} completed items"),
        "count": count,
    })))
}

#[derive(Deserialize)]
pub struct GenerateBody {
    date: Option<String>,
    recipe_ids: Option<Vec<String>>,
}

pub async fn generate(
    AuthUser(user_id): AuthUser,
    State(app): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<impl IntoResponse, AppError> {
    let input = match (body.recipe_ids, body.date) {
        (Some(ids), _) => GenerateInput::Recipes(ids),
        (None, Some(date)) => GenerateInput::Date(foodprep_shared::parse_date(date)?),
        (None, None) => {
            return Err(AppError::BadRequest(
                "date or recipe_ids is required".to_owned(),
            ));
        }
    };

    let output = app.shopping_command.generate(input, user_id).await?;

    Ok(Json(json!({
        "message": format!("Added {} items to shopping list", output.count),
        "count": output.count,
        "items": output.items,
    })))
}
