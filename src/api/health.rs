use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::services::user_service::{self, SharedUserStore};
use crate::utils::error::AppError;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub users: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<SharedUserStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        users: user_service::count_users(&store)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserPayload;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_reports_user_count() {
        let store = web::Data::new(SharedUserStore::default());
        user_service::create_user(&store, UserPayload::new("Ana", "a@x.com")).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "users-service");
        assert_eq!(body.users, 1);
    }
}
