//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create DTOs for inserts
//! - List-parameter structs where the entity has a listing endpoint

pub mod ambassador;
pub mod ambassador_application;
pub mod booking;
pub mod contact;
pub mod feedback;
pub mod password_reset;
pub mod saved_item;
pub mod scholarship;
pub mod session;
pub mod submission;
pub mod university;
pub mod user;
