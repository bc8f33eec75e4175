//! Shared domain types for the kurort backend.
//!
//! This crate carries everything the other workspace members agree on:
//! ID/timestamp aliases, the domain error type, the bilingual [`Locale`]
//! selector, the [`ModerationStatus`] lifecycle for patient-submitted
//! content, role and notification-channel constants, and the [`FileStore`]
//! seam behind which blob storage lives.

pub mod channels;
pub mod error;
pub mod locale;
pub mod moderation;
pub mod roles;
pub mod storage;
pub mod types;

pub use error::CoreError;
pub use locale::Locale;
pub use moderation::ModerationStatus;
pub use storage::{FileStore, LocalDiskStore};
