#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use foodprep::{
    auth::{JwtIdentity, generate_token},
    config::JwtConfig,
};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub jwt: JwtConfig,
    _dir: TempDir,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_minimum_32_characters_long".to_owned(),
        issuer: "foodprep".to_owned(),
        audience: "foodprep-api".to_owned(),
        expiration_days: 1,
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = foodprep::db::create_pool(&url, 1).await?;
    foodprep::migrate::run_migrations(&pool).await?;

    let jwt = jwt_config();
    let state = foodprep::AppState::new(
        foodprep_shared::State::single(pool),
        JwtIdentity::shared(&jwt),
    );

    Ok(TestApp {
        router: foodprep::router(state),
        jwt,
        _dir: dir,
    })
}

impl TestApp {
    pub fn token(&self, user_id: &str) -> String {
        generate_token(&self.jwt, user_id).unwrap()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        user_id: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);

        if let Some(user_id) = user_id {
            request = request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token(user_id)),
            );
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }
}
