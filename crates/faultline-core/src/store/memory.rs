//! In-memory user store: the stand-in for the relational backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{FaultError, NewUser, User, UserUpdate};
use crate::ports::Clock;
use crate::store::EntityStore;

struct StoreState {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// Mutex-guarded map keyed by sequential id, unique constraint on email.
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                users: HashMap::new(),
                next_id: 1,
            }),
            clock,
        }
    }

    /// Store pre-populated with the conventional three fixture users.
    pub async fn seeded(clock: Arc<dyn Clock>) -> Self {
        let store = Self::new(clock);
        for (email, name) in [
            ("john@example.com", "John Doe"),
            ("jane@example.com", "Jane Smith"),
            ("bob@example.com", "Bob Johnson"),
        ] {
            // 空ストアへの seed 投入なので Conflict は起きない
            let _ = store.create(NewUser::new(email, name)).await;
        }
        store
    }

    fn not_found(id: u64) -> FaultError {
        FaultError::NotFound(format!("User with ID {id} not found"))
    }
}

#[async_trait]
impl EntityStore for InMemoryUserStore {
    async fn get(&self, id: u64) -> Result<User, FaultError> {
        let state = self.state.lock().await;
        state.users.get(&id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, new: NewUser) -> Result<User, FaultError> {
        let mut state = self.state.lock().await;

        if state.users.values().any(|u| u.email == new.email) {
            return Err(FaultError::Conflict(format!(
                "User with email {} already exists",
                new.email
            )));
        }

        let id = state.next_id;
        state.next_id += 1;
        let user = User {
            id,
            email: new.email,
            name: new.name,
            created_at: self.clock.now(),
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: u64, fields: UserUpdate) -> Result<User, FaultError> {
        let mut state = self.state.lock().await;

        if !state.users.contains_key(&id) {
            return Err(Self::not_found(id));
        }

        // メール変更時は自分以外との一意性を再チェック
        if let Some(email) = &fields.email
            && state.users.values().any(|u| u.id != id && &u.email == email)
        {
            return Err(FaultError::Conflict(format!(
                "User with email {email} already exists"
            )));
        }

        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(email) = fields.email {
            user.email = email;
        }
        if let Some(name) = fields.name {
            user.name = name;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), FaultError> {
        let mut state = self.state.lock().await;
        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self) -> Result<Vec<User>, FaultError> {
        let state = self.state.lock().await;
        Ok(state.users.values().cloned().collect())
    }
}
