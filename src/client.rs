//! Cliente HTTP da API de usuários (usado pelo frontend)

mod types;
mod users_client;

pub use types::ClientError;
pub use users_client::{UsersClient, DEFAULT_BASE_URL};
