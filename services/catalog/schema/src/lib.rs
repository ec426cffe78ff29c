//! sea-orm entities for the catalog service.

pub mod claimed_items;
pub mod feedbacks;
pub mod found_items;
pub mod lost_items;
