//! Credentials and tokens.
//!
//! Passwords are hashed with Argon2id ([`password`]). Access tokens are
//! short-lived HS256 JWTs carrying the user id and role; refresh tokens are
//! random strings stored only as SHA-256 digests ([`jwt`]).

pub mod jwt;
pub mod password;
