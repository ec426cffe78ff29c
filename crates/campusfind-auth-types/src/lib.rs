//! Session token types shared between the auth service (issuer) and any
//! service that needs to validate a CampusFind session cookie.

pub mod cookie;
pub mod session;
pub mod token;
