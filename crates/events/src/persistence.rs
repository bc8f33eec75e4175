//! Durable capture of published events.
//!
//! [`EventPersistence`] drains a bus subscription and writes every event to
//! the `events` table. It runs as a spawned task for the lifetime of the
//! server and exits when the bus sender is dropped.

use sqlx::PgPool;
use tokio::sync::broadcast;

use crate::bus::PlatformEvent;

/// Background service writing all bus events to the database.
pub struct EventPersistence;

impl EventPersistence {
    /// Drain `rx` until the channel closes, inserting each event.
    ///
    /// A failed insert is logged and skipped; losing one audit row is
    /// preferable to stalling the whole event pipeline.
    pub async fn run(pool: PgPool, mut rx: broadcast::Receiver<PlatformEvent>) {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Err(e) = Self::persist(&pool, &event).await {
                        tracing::error!(
                            event_type = %event.event_type,
                            error = %e,
                            "Failed to persist event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Event persistence lagged; events lost");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, persistence task exiting");
                    break;
                }
            }
        }
    }

    /// Insert a single event row.
    pub async fn persist(pool: &PgPool, event: &PlatformEvent) -> Result<i64, sqlx::Error> {
        kurort_db::repositories::EventRepo::create(
            pool,
            &event.event_type,
            event.source_entity_type.as_deref(),
            event.source_entity_id,
            event.actor_user_id,
            &event.payload,
        )
        .await
    }
}
