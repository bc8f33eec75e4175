//! Event-to-notification routing engine.
//!
//! [`NotificationRouter`] subscribes to the platform event bus and routes
//! each event to the affected users, creating in-app notification rows
//! that the notification endpoints serve.

use tokio::sync::broadcast;
use kurort_core::channels::CHANNEL_IN_APP;
use kurort_core::types::DbId;
use kurort_db::repositories::NotificationRepo;
use kurort_db::DbPool;
use kurort_events::{EventPersistence, PlatformEvent};

/// Routes platform events to user notifications.
///
/// Consumes events from the broadcast channel and, for each event,
/// determines the target users and creates an in-app notification for
/// each of them.
pub struct NotificationRouter {
    pool: DbPool,
}

impl NotificationRouter {
    /// Create a new router with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the main routing loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](kurort_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.route_event(&event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to route event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Route a single event to all affected users.
    async fn route_event(&self, event: &PlatformEvent) -> Result<(), sqlx::Error> {
        let target_users = self.determine_targets(event);

        if target_users.is_empty() {
            return Ok(());
        }

        // The persistence service writes event rows from its own bus
        // subscription and may not have caught up yet. When the row is
        // missing the router inserts it itself, so a notification is
        // never lost to that race.
        let event_id = match self.find_event_id(event).await? {
            Some(id) => id,
            None => EventPersistence::persist(&self.pool, event).await?,
        };

        for user_id in target_users {
            NotificationRepo::create(&self.pool, event_id, user_id, CHANNEL_IN_APP).await?;
        }

        Ok(())
    }

    /// Determine which users should receive a notification for the event.
    ///
    /// Target user ids are carried in the event payload by the publishing
    /// handler; events without a recognized type or target produce no
    /// notifications.
    fn determine_targets(&self, event: &PlatformEvent) -> Vec<DbId> {
        match event.event_type.as_str() {
            // Friendship request: notify the addressee.
            "friendship.requested" => payload_id(event, "addressee_id").into_iter().collect(),

            // Request accepted or rejected: notify the original requester.
            "friendship.accepted" | "friendship.rejected" => {
                payload_id(event, "requester_id").into_iter().collect()
            }

            // Patient chat message: notify the other party.
            "message.sent" => payload_id(event, "recipient_id").into_iter().collect(),

            // New lead: notify the manager it was assigned to.
            "lead.created" => payload_id(event, "manager_id").into_iter().collect(),

            // Visitor wrote in a lead chat: notify the responsible manager.
            // Manager-sent messages carry no target (visitors are not users).
            "chat.message.sent" => payload_id(event, "manager_id").into_iter().collect(),

            // Moderation verdicts: notify the mood author.
            "mood.approved" | "mood.rejected" => {
                payload_id(event, "author_id").into_iter().collect()
            }

            _ => vec![],
        }
    }

    /// Look up the most recent persisted event row matching the event's
    /// type and source entity, so concurrent same-type events cannot
    /// attach a notification to each other's row.
    async fn find_event_id(&self, event: &PlatformEvent) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM events \
             WHERE event_type = $1 \
               AND source_entity_type IS NOT DISTINCT FROM $2 \
               AND source_entity_id IS NOT DISTINCT FROM $3 \
             ORDER BY id DESC LIMIT 1",
        )
        .bind(&event.event_type)
        .bind(event.source_entity_type.as_deref())
        .bind(event.source_entity_id)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Extract a user id from a payload field, if present and numeric.
fn payload_id(event: &PlatformEvent, field: &str) -> Option<DbId> {
    event.payload.get(field).and_then(|v| v.as_i64())
}
