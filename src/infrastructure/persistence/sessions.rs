use super::{parse_timestamp, Database};
use crate::domain::entities::Session;
use crate::domain::errors::DomainResult;
use crate::domain::ports::session_repository::SessionRepository;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl SessionRepository for Database {
    async fn create_session(&self, session: &Session) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO sessions (id, username, token, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&session.id)
        .bind(&session.username)
        .bind(&session.token)
        .bind(session.expires_at.to_rfc3339())
        .bind(session.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_session_by_token(&self, token: &str) -> DomainResult<Option<Session>> {
        let row = sqlx::query(
            "SELECT id, username, token, expires_at, created_at
             FROM sessions
             WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            let expires_at: String = row.try_get("expires_at")?;
            let created_at: String = row.try_get("created_at")?;
            Ok(Some(Session {
                id: row.try_get("id")?,
                username: row.try_get("username")?,
                token: row.try_get("token")?,
                expires_at: parse_timestamp("expires_at", &expires_at)?,
                created_at: parse_timestamp("created_at", &created_at)?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn delete_session(&self, token: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
