//! Entity store: CRUD over `User`, with a real-ish and a mock implementation.
//!
//! The trait is the seam the excluded HTTP layer programs against. Selection
//! between implementations is explicit configuration (`StorageMode`), never
//! library-availability sniffing.

mod memory;
mod mock;

pub use memory::InMemoryUserStore;
pub use mock::MockUserStore;

use async_trait::async_trait;

use crate::domain::{FaultError, NewUser, User, UserUpdate};

/// CRUD surface over the `users` collection.
///
/// - `create` fails with `Conflict` when the email is already taken.
/// - `get` / `update` / `delete` fail with `NotFound` when the id is absent.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn get(&self, id: u64) -> Result<User, FaultError>;

    async fn create(&self, new: NewUser) -> Result<User, FaultError>;

    async fn update(&self, id: u64, fields: UserUpdate) -> Result<User, FaultError>;

    async fn delete(&self, id: u64) -> Result<(), FaultError>;

    async fn list(&self) -> Result<Vec<User>, FaultError>;
}
