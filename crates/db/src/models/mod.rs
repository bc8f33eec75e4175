//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - For bilingual content: a localized `*View` projection built via
//!   `localize(locale)`

pub mod about;
pub mod award;
pub mod banner;
pub mod chat;
pub mod event;
pub mod faq;
pub mod friendship;
pub mod lead;
pub mod mood;
pub mod notification;
pub mod offer;
pub mod patient_message;
pub mod role;
pub mod service_category;
pub mod session;
pub mod showcase_room;
pub mod user;
