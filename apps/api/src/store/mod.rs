//! Repositories for users and analysis history.
//!
//! `AppState` carries `Arc<dyn UserRepository>` and `Arc<dyn AnalysisRepository>`;
//! `MemoryStore` backs tests and database-less runs, `PgStore` backs production.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::models::user::User;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. Fails with `AppError::Conflict` if the username is taken.
    async fn create_user(&self, user: User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
}

/// Append-only analysis history.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn append(&self, record: AnalysisRecord) -> Result<AnalysisRecord, AppError>;
    /// All records owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<AnalysisRecord>, AppError>;
}

pub(crate) fn username_taken() -> AppError {
    AppError::Conflict("User with this username already exists".to_string())
}
