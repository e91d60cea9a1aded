//! Mock user store: synthesizes deterministic-looking records.
//!
//! Used when the real backing store is unavailable. `get` never fails; it
//! fabricates a plausible record for any id so read paths keep working
//! without a database.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{FaultError, NewUser, User, UserUpdate};
use crate::ports::{Clock, Entropy};
use crate::store::EntityStore;

pub struct MockUserStore {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
}

impl MockUserStore {
    pub fn new(clock: Arc<dyn Clock>, entropy: Arc<dyn Entropy>) -> Self {
        Self { clock, entropy }
    }

    fn synthesize(&self, id: u64) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            name: format!("Mock User {id}"),
            created_at: self.clock.now(),
        }
    }
}

#[async_trait]
impl EntityStore for MockUserStore {
    async fn get(&self, id: u64) -> Result<User, FaultError> {
        Ok(self.synthesize(id))
    }

    async fn create(&self, new: NewUser) -> Result<User, FaultError> {
        Ok(User {
            id: self.entropy.pick_u64(1..=1_000),
            email: new.email,
            name: new.name,
            created_at: self.clock.now(),
        })
    }

    async fn update(&self, id: u64, fields: UserUpdate) -> Result<User, FaultError> {
        let mut user = self.synthesize(id);
        if let Some(email) = fields.email {
            user.email = email;
        }
        if let Some(name) = fields.name {
            user.name = name;
        }
        Ok(user)
    }

    async fn delete(&self, _id: u64) -> Result<(), FaultError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, FaultError> {
        Ok(vec![self.synthesize(1), self.synthesize(2)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, FixedEntropy};
    use chrono::{TimeZone, Utc};

    fn store() -> MockUserStore {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        MockUserStore::new(Arc::new(FixedClock::new(t)), Arc::new(FixedEntropy::new(0.0)))
    }

    #[tokio::test]
    async fn get_synthesizes_the_same_record_for_the_same_id() {
        let store = store();
        let a = store.get(7).await.unwrap();
        let b = store.get(7).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.email, "user7@example.com");
        assert_eq!(a.name, "Mock User 7");
    }

    #[tokio::test]
    async fn get_never_fails() {
        let store = store();
        assert!(store.get(u64::MAX).await.is_ok());
    }

    #[tokio::test]
    async fn create_fabricates_an_id() {
        let store = store();
        let user = store
            .create(NewUser::new("x@example.com", "X"))
            .await
            .unwrap();
        assert!((1..=1_000).contains(&user.id));
        assert_eq!(user.email, "x@example.com");
    }

    #[tokio::test]
    async fn list_returns_fixture_shaped_records() {
        let store = store();
        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "user1@example.com");
    }
}
