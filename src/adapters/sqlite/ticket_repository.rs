//! SQLite implementation of TicketRepository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::foundation::{TicketId, Timestamp};
use crate::domain::ticket::{NewTicket, Ticket, TicketStatus};
use crate::ports::{PersistenceError, TicketRepository};

/// SQLite-backed ticket store.
///
/// Ids come from `INTEGER PRIMARY KEY AUTOINCREMENT`, so they are never
/// reused even after deletes.
#[derive(Clone)]
pub struct SqliteTicketRepository {
    pool: SqlitePool,
}

impl SqliteTicketRepository {
    /// Creates a new SqliteTicketRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for SqliteTicketRepository {
    async fn create(&self, ticket: &NewTicket) -> Result<TicketId, PersistenceError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            PersistenceError::Database(format!("Failed to start transaction: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO tickets (created_at, name, phone, message, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(Timestamp::now().to_iso8601())
        .bind(ticket.name())
        .bind(ticket.phone())
        .bind(ticket.message())
        .bind(ticket.initial_status().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| PersistenceError::Database(format!("Failed to insert ticket: {}", e)))?;

        let id = TicketId::from_raw(result.last_insert_rowid());

        tx.commit().await.map_err(|e| {
            PersistenceError::Database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(id)
    }

    async fn list(&self, limit: u32) -> Result<Vec<Ticket>, PersistenceError> {
        let rows = sqlx::query(
            r#"
            SELECT id, created_at, name, phone, message, status
            FROM tickets
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PersistenceError::Database(format!("Failed to fetch tickets: {}", e)))?;

        rows.iter().map(row_to_ticket).collect()
    }
}

fn row_to_ticket(row: &SqliteRow) -> Result<Ticket, PersistenceError> {
    let decode = |e: sqlx::Error| PersistenceError::Decode(e.to_string());

    let id: i64 = row.try_get("id").map_err(decode)?;
    let created_at: String = row.try_get("created_at").map_err(decode)?;
    let status: String = row.try_get("status").map_err(decode)?;

    Ok(Ticket {
        id: TicketId::from_raw(id),
        created_at: Timestamp::parse_iso8601(&created_at)
            .map_err(|e| PersistenceError::Decode(e.to_string()))?,
        name: row.try_get("name").map_err(decode)?,
        phone: row.try_get("phone").map_err(decode)?,
        message: row.try_get("message").map_err(decode)?,
        status: status
            .parse::<TicketStatus>()
            .map_err(|e| PersistenceError::Decode(e.to_string()))?,
    })
}
