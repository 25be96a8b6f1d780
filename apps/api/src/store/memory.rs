use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::models::user::User;
use crate::store::{username_taken, AnalysisRepository, UserRepository};

/// Process-lifetime store. One writer at a time; readers see a consistent snapshot.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    analyses: RwLock<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(username_taken());
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl AnalysisRepository for MemoryStore {
    async fn append(&self, record: AnalysisRecord) -> Result<AnalysisRecord, AppError> {
        self.analyses.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<AnalysisRecord>, AppError> {
        let analyses = self.analyses.read().await;
        // Reverse insertion order first so equal timestamps keep newest-first.
        let mut records: Vec<AnalysisRecord> = analyses
            .iter()
            .rev()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, AnalysisSource};
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn record(user_id: Uuid, file_name: &str, minutes_ago: i64) -> AnalysisRecord {
        let mut record = AnalysisRecord::new(
            user_id,
            file_name.to_string(),
            "job".to_string(),
            AnalysisResult {
                score: 60,
                matched_skills: vec![],
                missing_skills: vec![],
                suggestions: vec![],
                improvements: vec![],
                source: AnalysisSource::Local,
            },
        );
        record.created_at = Utc::now() - Duration::minutes(minutes_ago);
        record
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        store
            .create_user(User::new("ada".to_string(), "h".to_string()))
            .await
            .unwrap();
        let err = store
            .create_user(User::new("ada".to_string(), "h2".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_user_by_name_and_id() {
        let store = MemoryStore::new();
        let user = store
            .create_user(User::new("grace".to_string(), "h".to_string()))
            .await
            .unwrap();
        let by_name = store.find_by_username("grace").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "grace");
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_history_is_per_user_newest_first() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.append(record(alice, "old.pdf", 30)).await.unwrap();
        store.append(record(bob, "bob.pdf", 10)).await.unwrap();
        store.append(record(alice, "new.pdf", 1)).await.unwrap();
        store.append(record(alice, "mid.pdf", 15)).await.unwrap();

        let history = store.list_for_user(alice).await.unwrap();
        let names: Vec<&str> = history.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["new.pdf", "mid.pdf", "old.pdf"]);
        assert!(history.iter().all(|r| r.user_id == alice));
    }

    #[tokio::test]
    async fn test_equal_timestamps_list_latest_append_first() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let first = record(user, "first.pdf", 5);
        let mut second = record(user, "second.pdf", 5);
        second.created_at = first.created_at;
        store.append(first).await.unwrap();
        store.append(second).await.unwrap();

        let history = store.list_for_user(user).await.unwrap();
        assert_eq!(history[0].file_name, "second.pdf");
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(MemoryStore::new());
        let user = Uuid::new_v4();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append(record(user, &format!("{i}.pdf"), i))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.list_for_user(user).await.unwrap().len(), 32);
    }
}
