use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post, put},
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::{auth::IdentityProvider, error::AppError};

mod dashboard;
mod health;
mod meal_plans;
mod nutrition;
mod recipes;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub recipe_command: foodprep_recipe::Command,
    pub meal_plan_command: foodprep_mealplan::Command,
    pub shopping_command: foodprep_shopping::Command,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: foodprep_shared::State, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            identity,
            recipe_command: foodprep_recipe::Command::new(state.clone()),
            meal_plan_command: foodprep_mealplan::Command::new(state.clone()),
            shopping_command: foodprep_shopping::Command::new(state.clone()),
            pool: state.read_db,
        }
    }
}

pub async fn fallback() -> AppError {
    AppError::RouteNotFound
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        // No auth
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::get).put(recipes::update).delete(recipes::delete),
        )
        .route("/meal-plans", get(meal_plans::list).post(meal_plans::create))
        .route(
            "/meal-plans/{id}",
            put(meal_plans::update).delete(meal_plans::delete),
        )
        .route(
            "/shopping-list",
            get(shopping_list::list).post(shopping_list::create),
        )
        .route("/shopping-list/completed", delete(shopping_list::clear_completed))
        .route("/shopping-list/generate", post(shopping_list::generate))
        .route(
            "/shopping-list/{id}",
            put(shopping_list::update).delete(shopping_list::delete),
        )
        .route("/nutrition/daily", get(nutrition::daily))
        .route("/nutrition/weekly", get(nutrition::weekly))
        .route("/dashboard/stats", get(dashboard::stats));

    Router::new()
        .nest("/api", api)
        .fallback(fallback)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        )
        .with_state(app_state)
}
