use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::env;

use super::types::ClientError;
use crate::models::{ErrorResponse, MessageResponse, User, UserPayload};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Cliente pré-configurado com a URL base do backend
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Lê `USERS_API_URL`, com fallback para `http://localhost:3333`
    pub fn from_env() -> Self {
        let base_url = env::var("USERS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(self.users_url()).send().await?;
        Self::parse(response).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ClientError> {
        let response = self.http.post(self.users_url()).json(payload).send().await?;
        Self::parse(response).await
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<User, ClientError> {
        let response = self.http.put(self.user_url(id)).json(payload).send().await?;
        Self::parse(response).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let response = self.http.delete(self.user_url(id)).send().await?;
        Self::parse(response).await
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            log::debug!("🔍 Users API returned 404: {}", message);
            return Err(ClientError::NotFound(message));
        }

        if !status.is_success() {
            log::warn!("⚠️ Users API error: {}", status);
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::services::user_service::SharedUserStore;
    use actix_web::{web, App, HttpServer};

    /// Sobe o backend numa porta efêmera e devolve a URL base
    fn spawn_server() -> String {
        let store = web::Data::new(SharedUserStore::default());
        let server = HttpServer::new(move || App::new().app_data(store.clone()).configure(api::configure))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];

        actix_rt::spawn(server.run());
        format!("http://{}", addr)
    }

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(UsersClient::default().base_url(), "http://localhost:3333");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = UsersClient::new("http://example.com:8080/");
        assert_eq!(client.base_url(), "http://example.com:8080");
        assert_eq!(client.user_url("abc"), "http://example.com:8080/users/abc");
    }

    #[actix_web::test]
    async fn test_crud_against_live_server() {
        let client = UsersClient::new(spawn_server());

        assert!(client.list_users().await.unwrap().is_empty());

        let ana = client.create_user(&UserPayload::new("Ana", "a@x.com")).await.unwrap();
        let bia = client.create_user(&UserPayload::new("Bia", "b@x.com")).await.unwrap();
        assert_ne!(ana.id, bia.id);
        assert_eq!(client.list_users().await.unwrap(), vec![ana.clone(), bia.clone()]);

        let updated = client
            .update_user(&ana.id, &UserPayload::new("Ana Maria", "am@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, ana.id);
        assert_eq!(updated.name.as_deref(), Some("Ana Maria"));

        let deleted = client.delete_user(&ana.id).await.unwrap();
        assert_eq!(deleted.message, "User deleted!");
        assert_eq!(client.list_users().await.unwrap(), vec![bia]);
    }

    #[actix_web::test]
    async fn test_missing_user_maps_to_not_found() {
        let client = UsersClient::new(spawn_server());

        let result = client.update_user("does-not-exist", &UserPayload::new("x", "y")).await;
        assert!(matches!(result, Err(ClientError::NotFound(msg)) if msg == "User not found!"));

        let result = client.delete_user("does-not-exist").await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
