use serde::{Deserialize, Serialize};

/// Usuário mantido em memória pelo `UserStore`
///
/// `name` e `email` não são validados: campos ausentes no corpo da
/// requisição ficam como `None` e são omitidos do JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: String,  // UUID v4 gerado pelo servidor, imutável
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Monta o registro a partir do payload, com o id informado
    pub fn from_payload(id: String, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
        }
    }
}

/// Corpo de POST /users e PUT /users/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_omitted() {
        let payload: UserPayload = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        let user = User::from_payload("abc".to_string(), payload);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "abc", "name": "Ana" }));
    }

    #[test]
    fn test_full_user_serializes_all_fields() {
        let user = User::from_payload("abc".to_string(), UserPayload::new("Ana", "a@x.com"));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "abc", "name": "Ana", "email": "a@x.com" }));
    }
}
