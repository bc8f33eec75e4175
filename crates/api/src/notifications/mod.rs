//! Notification routing infrastructure.
//!
//! The [`NotificationRouter`] subscribes to the event bus and creates
//! in-app notification records for the users affected by each event.

pub mod router;

pub use router::NotificationRouter;
