use super::{optional_text, optional_timestamp, Database};
use crate::domain::entities::{AccountId, Vacation};
use crate::domain::errors::DomainResult;
use crate::domain::ports::vacation_repository::VacationRepository;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl VacationRepository for Database {
    async fn retrieve_vacation(&self, account_id: &AccountId) -> DomainResult<Vacation> {
        let row = sqlx::query(
            "SELECT is_enabled, from_date, to_date, subject, text_body, html_body
             FROM vacations
             WHERE account_id = ?",
        )
        .bind(account_id.identifier())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(Vacation::default());
        };

        let is_enabled: i64 = row.try_get("is_enabled")?;
        Ok(Vacation {
            is_enabled: is_enabled != 0,
            from_date: optional_timestamp(&row, "from_date")?,
            to_date: optional_timestamp(&row, "to_date")?,
            subject: optional_text(&row, "subject")?,
            text_body: optional_text(&row, "text_body")?,
            html_body: optional_text(&row, "html_body")?,
        })
    }

    async fn modify_vacation(&self, account_id: &AccountId, vacation: &Vacation) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO vacations (account_id, is_enabled, from_date, to_date, subject, text_body, html_body, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(account_id) DO UPDATE SET
                 is_enabled = excluded.is_enabled,
                 from_date = excluded.from_date,
                 to_date = excluded.to_date,
                 subject = excluded.subject,
                 text_body = excluded.text_body,
                 html_body = excluded.html_body,
                 updated_at = excluded.updated_at",
        )
        .bind(account_id.identifier())
        .bind(if vacation.is_enabled { 1_i64 } else { 0_i64 })
        .bind(vacation.from_date.map(|date| date.to_rfc3339()))
        .bind(vacation.to_date.map(|date| date.to_rfc3339()))
        .bind(vacation.subject.clone())
        .bind(vacation.text_body.clone())
        .bind(vacation.html_body.clone())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(account_id = %account_id, enabled = vacation.is_enabled, "Vacation stored");

        Ok(())
    }
}
