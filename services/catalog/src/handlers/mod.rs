pub mod claim;
pub mod feedback;
pub mod item;
