//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ambassador_application_repo;
pub mod ambassador_repo;
pub mod booking_repo;
pub mod contact_repo;
pub mod feedback_repo;
pub mod password_reset_repo;
pub mod saved_item_repo;
pub mod scholarship_repo;
pub mod session_repo;
pub mod university_repo;
pub mod user_repo;

pub use ambassador_application_repo::AmbassadorApplicationRepo;
pub use ambassador_repo::AmbassadorRepo;
pub use booking_repo::BookingRepo;
pub use contact_repo::ContactRepo;
pub use feedback_repo::FeedbackRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use saved_item_repo::SavedItemRepo;
pub use scholarship_repo::ScholarshipRepo;
pub use session_repo::SessionRepo;
pub use university_repo::UniversityRepo;
pub use user_repo::UserRepo;
