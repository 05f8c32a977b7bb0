use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{
    Chirp, ChirpBody, ChirpId, ChirpRepository, PasswordHash, RepositoryError, RepositoryFuture,
    RepositoryResult, User, UserEmail, UserId, UserRepository,
};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => RepositoryError::Conflict,
        _ => RepositoryError::storage(err.to_string()),
    }
}

fn invalid_data(message: impl Into<String>) -> RepositoryError {
    RepositoryError::storage(message)
}

#[derive(Debug, FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = RepositoryError;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        let email = UserEmail::parse(value.email).map_err(|err| invalid_data(err.to_string()))?;
        let password =
            PasswordHash::new(value.hashed_password).map_err(|err| invalid_data(err.to_string()))?;

        Ok(User {
            id: UserId::from(value.id),
            email,
            password,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ChirpRecord {
    id: Uuid,
    user_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ChirpRecord> for Chirp {
    fn from(value: ChirpRecord) -> Self {
        Chirp {
            id: ChirpId::from(value.id),
            user_id: UserId::from(value.user_id),
            body: ChirpBody::from_stored(value.body),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    fn create(&self, user: User) -> RepositoryFuture<User> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"
                INSERT INTO users (id, email, hashed_password, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, email, hashed_password, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(user.id))
            .bind(user.email.as_str())
            .bind(user.password.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            User::try_from(record)
        })
    }

    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, hashed_password, created_at, updated_at FROM users WHERE email = $1"#,
            )
            .bind(email.as_str())
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(User::try_from).transpose()
        })
    }

    fn list(&self) -> RepositoryFuture<Vec<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, hashed_password, created_at, updated_at FROM users ORDER BY created_at ASC, id ASC"#,
            )
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            records
                .into_iter()
                .map(User::try_from)
                .collect::<RepositoryResult<Vec<_>>>()
        })
    }

    fn delete_all(&self) -> RepositoryFuture<u64> {
        let pool = self.pool.clone();
        Box::pin(async move {
            // chirps 通过外键级联删除
            let result = sqlx::query(r#"DELETE FROM users"#)
                .execute(&pool)
                .await
                .map_err(map_sqlx_err)?;

            Ok::<_, RepositoryError>(result.rows_affected())
        })
    }
}

#[derive(Clone)]
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ChirpRepository for PgChirpRepository {
    fn create(&self, chirp: Chirp) -> RepositoryFuture<Chirp> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, ChirpRecord>(
                r#"
                INSERT INTO chirps (id, user_id, body, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, user_id, body, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(chirp.id))
            .bind(Uuid::from(chirp.user_id))
            .bind(chirp.body.as_str())
            .bind(chirp.created_at)
            .bind(chirp.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok::<_, RepositoryError>(Chirp::from(record))
        })
    }

    fn find_by_id(&self, id: ChirpId) -> RepositoryFuture<Option<Chirp>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, ChirpRecord>(
                r#"SELECT id, user_id, body, created_at, updated_at FROM chirps WHERE id = $1"#,
            )
            .bind(Uuid::from(id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok::<_, RepositoryError>(record.map(Chirp::from))
        })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Chirp>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, ChirpRecord>(
                r#"SELECT id, user_id, body, created_at, updated_at
                FROM chirps
                ORDER BY created_at ASC, id ASC"#,
            )
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok::<_, RepositoryError>(records.into_iter().map(Chirp::from).collect::<Vec<_>>())
        })
    }
}

#[derive(Clone)]
pub struct PgStorage {
    pub pool: PgPool,
    pub user_repository: Arc<PgUserRepository>,
    pub chirp_repository: Arc<PgChirpRepository>,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: Arc::new(PgUserRepository::new(pool.clone())),
            chirp_repository: Arc::new(PgChirpRepository::new(pool.clone())),
            pool,
        }
    }
}

pub async fn create_pg_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
