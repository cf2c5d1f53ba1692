//! wrksht-auth
//!
//! Bearer token validation against a Cognito user pool.

pub mod error;
pub mod jwks;
pub mod jwt;
