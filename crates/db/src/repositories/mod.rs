//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod award_repo;
pub mod banner_repo;
pub mod chat_repo;
pub mod event_repo;
pub mod faq_repo;
pub mod friendship_repo;
pub mod lead_repo;
pub mod mood_repo;
pub mod notification_repo;
pub mod offer_repo;
pub mod patient_message_repo;
pub mod role_repo;
pub mod service_category_repo;
pub mod session_repo;
pub mod showcase_room_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use award_repo::AwardRepo;
pub use banner_repo::BannerRepo;
pub use chat_repo::ChatRepo;
pub use event_repo::EventRepo;
pub use faq_repo::FaqRepo;
pub use friendship_repo::FriendshipRepo;
pub use lead_repo::LeadRepo;
pub use mood_repo::MoodRepo;
pub use notification_repo::NotificationRepo;
pub use offer_repo::OfferRepo;
pub use patient_message_repo::PatientMessageRepo;
pub use role_repo::RoleRepo;
pub use service_category_repo::ServiceCategoryRepo;
pub use session_repo::SessionRepo;
pub use showcase_room_repo::ShowcaseRoomRepo;
pub use user_repo::UserRepo;
