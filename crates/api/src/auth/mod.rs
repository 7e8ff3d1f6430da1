//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access tokens plus the opaque refresh and reset tokens.
//! - [`observer`] -- broadcast of sign-in, sign-up and sign-out events.

pub mod jwt;
pub mod observer;
pub mod password;
