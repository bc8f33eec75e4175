//! Request handlers, one module per resource.

pub mod about;
pub mod admin;
pub mod auth;
pub mod award;
pub mod banner;
pub mod chat;
pub mod faq;
pub mod friendship;
pub mod lead;
pub mod mood;
pub mod notification;
pub mod offer;
pub mod patient_message;
pub mod service_category;
pub mod showcase_room;
pub mod upload;
