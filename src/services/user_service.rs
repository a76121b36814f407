// ==================== USERS ====================
// Operações CRUD sobre o UserStore compartilhado entre as requisições.
// Busca + escrita acontecem sob o mesmo guard, então o par é atômico.

use crate::{
    database::UserStore,
    models::{User, UserPayload},
    utils::error::AppError,
};
use std::sync::{Mutex, MutexGuard};

/// Store injetado no `App` via `web::Data`
pub type SharedUserStore = Mutex<UserStore>;

fn lock(store: &SharedUserStore) -> Result<MutexGuard<'_, UserStore>, AppError> {
    store
        .lock()
        .map_err(|e| AppError::Internal(format!("user store lock poisoned: {}", e)))
}

pub fn list_users(store: &SharedUserStore) -> Result<Vec<User>, AppError> {
    Ok(lock(store)?.list().to_vec())
}

pub fn create_user(store: &SharedUserStore, payload: UserPayload) -> Result<User, AppError> {
    Ok(lock(store)?.insert(payload))
}

/// Substitui nome e email mantendo o id do path
pub fn update_user(store: &SharedUserStore, id: &str, payload: UserPayload) -> Result<User, AppError> {
    let mut users = lock(store)?;
    let index = users.find_index(id).ok_or_else(AppError::user_not_found)?;

    let user = User::from_payload(id.to_string(), payload);
    users.replace_at(index, user.clone());
    Ok(user)
}

pub fn delete_user(store: &SharedUserStore, id: &str) -> Result<User, AppError> {
    let mut users = lock(store)?;
    let index = users.find_index(id).ok_or_else(AppError::user_not_found)?;

    users.remove_at(index).ok_or_else(AppError::user_not_found)
}

pub fn count_users(store: &SharedUserStore) -> Result<usize, AppError> {
    Ok(lock(store)?.len())
}
