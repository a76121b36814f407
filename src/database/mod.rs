use crate::models::{User, UserPayload};
use uuid::Uuid;

/// Armazenamento em memória dos usuários
///
/// Mantém a ordem de inserção. A busca por id é linear: o volume é pequeno e
/// um mapa por id perderia a ordem que `list()` precisa devolver.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos os usuários, na ordem de inserção
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Cria o usuário com um id novo e adiciona ao final
    pub fn insert(&mut self, payload: UserPayload) -> User {
        let user = User::from_payload(self.fresh_id(), payload);
        self.users.push(user.clone());
        user
    }

    pub fn find_index(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    /// Sobrescreve o registro na posição. O índice deve vir de `find_index`.
    pub fn replace_at(&mut self, index: usize, user: User) -> Option<User> {
        let slot = self.users.get_mut(index)?;
        Some(std::mem::replace(slot, user))
    }

    /// Remove exatamente um registro, mantendo a ordem dos demais
    pub fn remove_at(&mut self, index: usize) -> Option<User> {
        if index < self.users.len() {
            Some(self.users.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // v4 colide com probabilidade desprezível, mas o invariante é de unicidade
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_index(&id).is_none() {
                return id;
            }
        }
    }
}
