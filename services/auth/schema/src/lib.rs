//! sea-orm entities owned by the auth service.

pub mod otps;
pub mod outbox_events;
pub mod users;
