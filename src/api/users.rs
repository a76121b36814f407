use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use crate::{
    models::{ErrorResponse, MessageResponse, User, UserPayload},
    services::user_service::{self, SharedUserStore},
    utils::error::AppError,
};

pub const USER_DELETED: &str = "User deleted!";

/// Lê o corpo de POST/PUT sem exigir JSON
///
/// Corpo vazio ou Content-Type que não é JSON viram payload vazio. Só um
/// corpo declarado como JSON e malformado gera 400.
fn parse_payload(req: &HttpRequest, body: &web::Bytes) -> Result<UserPayload, AppError> {
    if body.is_empty() || !is_json(req.content_type()) {
        return Ok(UserPayload::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::InvalidRequest(e.to_string()))
}

fn is_json(content_type: &str) -> bool {
    let content_type = content_type.trim();
    content_type.eq_ignore_ascii_case("application/json")
        || content_type.to_ascii_lowercase().ends_with("+json")
}

/// GET /users - Lista todos os usuários na ordem de cadastro
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, in insertion order", body = [User])
    )
)]
pub async fn list_users(store: web::Data<SharedUserStore>) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(&store)?;

    log::info!("📋 GET /users - {} users", users.len());

    Ok(HttpResponse::Ok().json(users))
}

/// POST /users - Cadastra usuário (id gerado pelo servidor)
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Created user, including the generated id", body = User),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    )
)]
pub async fn create_user(
    req: HttpRequest,
    store: web::Data<SharedUserStore>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = parse_payload(&req, &body)?;
    let user = user_service::create_user(&store, payload)?;

    log::info!("✅ POST /users - Created {}", user.id);

    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id} - Substitui nome e email do usuário
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn update_user(
    req: HttpRequest,
    store: web::Data<SharedUserStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = parse_payload(&req, &body)?;

    match user_service::update_user(&store, &id, payload) {
        Ok(user) => {
            log::info!("🔧 PUT /users/{} - Updated", id);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(e) => {
            log::warn!("⚠️ PUT /users/{} - {}", id, e);
            Err(e)
        }
    }
}

/// DELETE /users/{id} - Remove o usuário
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed", body = MessageResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<SharedUserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match user_service::delete_user(&store, &id) {
        Ok(_) => {
            log::info!("🗑️ DELETE /users/{} - Removed", id);
            Ok(HttpResponse::Ok().json(MessageResponse {
                message: USER_DELETED.to_string(),
            }))
        }
        Err(e) => {
            log::warn!("⚠️ DELETE /users/{} - {}", id, e);
            Err(e)
        }
    }
}
