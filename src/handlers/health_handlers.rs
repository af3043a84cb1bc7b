use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::{database, error::ApiError, AppState};

/// Health check endpoint with database connectivity check
pub async fn health_check(State(app_state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let db_status = check_database_health(&app_state).await;
    let healthy = db_status["healthy"].as_bool().unwrap_or(false);

    let health_status = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "company-service",
        "checks": {
            "database": db_status,
        }
    });

    if !healthy {
        return Err(ApiError::internal("Service is unhealthy"));
    }

    Ok(Json(health_status))
}

/// Simple health check endpoint for load balancers
pub async fn liveness_check() -> Result<&'static str, StatusCode> {
    Ok("OK")
}

async fn check_database_health(app_state: &AppState) -> Value {
    match database::health_check(&app_state.db_pool).await {
        Ok(()) => json!({
            "healthy": true,
            "message": "Database connection successful",
        }),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            json!({
                "healthy": false,
                "message": "Database connection failed",
                "error": e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn liveness_check_answers_ok() {
        let app = Router::new().route("/liveness", get(liveness_check));

        let request = Request::builder()
            .uri("/liveness")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
