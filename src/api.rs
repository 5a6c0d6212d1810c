//! HTTP surface for the subscription proxy.
//!
//! A single route: `POST /api/subscribe`. Failures come back as structured
//! `{"error": ...}` bodies with the status the error category dictates;
//! upstream provider errors keep the provider's status and message.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::subscribe::{BrevoApi, MailingList, SubscribeRequest};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidEmail => StatusCode::BAD_REQUEST,
            Error::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared handler state.
pub struct AppState {
    /// `None` when the server credential is missing; every request then
    /// fails with the configuration error instead of the process refusing
    /// to start.
    mailing: Option<MailingList>,
}

/// Build the application router from configuration.
pub fn router(config: &Config) -> Router {
    let mailing = config.brevo_api_key.as_ref().map(|key| {
        MailingList::new(Arc::new(BrevoApi::new(key.clone())), config.list_name.clone())
    });

    if mailing.is_none() {
        error!("BREVO_API_KEY is not set");
    }

    Router::new()
        .route("/api/subscribe", post(subscribe_handler))
        .with_state(Arc::new(AppState { mailing }))
}

/// Run the server until shutdown.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "subscription proxy listening");
    axum::serve(listener, router(&config)).await
}

async fn subscribe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<serde_json::Value>> {
    let mailing = state.mailing.as_ref().ok_or(Error::MissingApiKey)?;
    mailing.subscribe(request).await?;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribe::MockContactListApi;

    fn request(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: email.to_string(),
            first_name: None,
            last_name: None,
        }
    }

    fn state_with(api: MockContactListApi) -> Arc<AppState> {
        Arc::new(AppState {
            mailing: Some(MailingList::new(Arc::new(api), "cookingtemps")),
        })
    }

    #[tokio::test]
    async fn test_success_returns_200() {
        let mut api = MockContactListApi::new();
        api.expect_find_list_id().returning(|_| Ok(Some(1)));
        api.expect_upsert_contact().returning(|_| Ok(()));

        let response = subscribe_handler(State(state_with(api)), Json(request("a@example.com")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_email_returns_400() {
        let response = subscribe_handler(
            State(state_with(MockContactListApi::new())),
            Json(request("")),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_500() {
        let state = Arc::new(AppState { mailing: None });
        let response = subscribe_handler(State(state), Json(request("a@example.com")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_upstream_status_passes_through() {
        let mut api = MockContactListApi::new();
        api.expect_find_list_id().returning(|_| Ok(Some(1)));
        api.expect_upsert_contact().returning(|_| {
            Err(Error::Upstream {
                status: 429,
                message: "Too many requests".to_string(),
            })
        });

        let response = subscribe_handler(State(state_with(api)), Json(request("a@example.com")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
