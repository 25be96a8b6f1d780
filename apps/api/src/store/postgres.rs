use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::models::user::User;
use crate::store::{username_taken, AnalysisRepository, UserRepository};

/// PostgreSQL-backed repositories. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

const MAX_CONNECTIONS: u32 = 10;

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url` and brings the schema up to date.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("PostgreSQL ready, migrations applied");
        Ok(Self::new(pool))
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                username_taken()
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl AnalysisRepository for PgStore {
    async fn append(&self, record: AnalysisRecord) -> Result<AnalysisRecord, AppError> {
        let stored = sqlx::query_as::<_, AnalysisRecord>(
            r#"
            INSERT INTO analyses
                (id, user_id, file_name, job_description, ats_score,
                 matched_skills, missing_skills, suggestions, improvements, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.file_name)
        .bind(&record.job_description)
        .bind(record.ats_score)
        .bind(&record.matched_skills)
        .bind(&record.missing_skills)
        .bind(&record.suggestions)
        .bind(&record.improvements)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<AnalysisRecord>, AppError> {
        let records = sqlx::query_as::<_, AnalysisRecord>(
            "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC, seq DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
