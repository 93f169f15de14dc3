//! Vote repository.

use async_trait::async_trait;
use chrono::Utc;

use hn_core::entities::Vote;

use crate::HnDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::VoteRepository;

const VOTE_COLUMNS: &str = "id, link_id, user_id, created_at";

fn row_to_vote(row: &libsql::Row) -> Result<Vote, DatabaseError> {
    Ok(Vote {
        id: row.get::<i64>(0)?,
        link_id: row.get::<i64>(1)?,
        user_id: row.get::<i64>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HnDb {
    async fn collect_votes(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Vote>, DatabaseError> {
        let mut rows = self.conn().query(sql, params).await?;
        let mut votes = Vec::new();
        while let Some(row) = rows.next().await? {
            votes.push(row_to_vote(&row)?);
        }
        Ok(votes)
    }
}

#[async_trait]
impl VoteRepository for HnDb {
    async fn create_vote(&self, link_id: i64, user_id: i64) -> Result<Vote, DatabaseError> {
        let now = Utc::now();

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO votes (link_id, user_id, created_at) VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![link_id, user_id, now.to_rfc3339()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;

        tracing::info!(vote_id = id, link_id, user_id, "recorded vote");

        Ok(Vote {
            id,
            link_id,
            user_id,
            created_at: now,
        })
    }

    async fn list_votes(&self) -> Result<Vec<Vote>, DatabaseError> {
        self.collect_votes(&format!("SELECT {VOTE_COLUMNS} FROM votes ORDER BY id"), ())
            .await
    }

    async fn votes_for_link(&self, link_id: i64) -> Result<Vec<Vote>, DatabaseError> {
        self.collect_votes(
            &format!("SELECT {VOTE_COLUMNS} FROM votes WHERE link_id = ?1 ORDER BY id"),
            [link_id],
        )
        .await
    }

    async fn votes_by_user(&self, user_id: i64) -> Result<Vec<Vote>, DatabaseError> {
        self.collect_votes(
            &format!("SELECT {VOTE_COLUMNS} FROM votes WHERE user_id = ?1 ORDER BY id"),
            [user_id],
        )
        .await
    }
}
