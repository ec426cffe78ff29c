//! Domain types shared across CampusFind services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod email;
pub mod pagination;
pub mod user;
