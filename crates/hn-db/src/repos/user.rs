//! User repository: the identities links and votes point at.

use async_trait::async_trait;
use chrono::Utc;

use hn_core::entities::User;

use crate::HnDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::UserRepository;

const USER_COLUMNS: &str = "id, username, email, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        username: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HnDb {
    async fn find_user_where(
        &self,
        clause: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {USER_COLUMNS} FROM users WHERE {clause}"), params)
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for HnDb {
    async fn create_user(&self, username: &str, email: &str) -> Result<User, DatabaseError> {
        let now = Utc::now();

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO users (username, email, created_at) VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![username, email, now.to_rfc3339()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;

        tracing::info!(user_id = id, username, "registered user");

        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            created_at: now,
        })
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        self.find_user_where("id = ?1", [id]).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        self.find_user_where("username = ?1", [username]).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"),
                (),
            )
            .await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}
