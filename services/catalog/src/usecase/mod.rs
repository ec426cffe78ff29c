pub mod catalog;
pub mod claim;
pub mod feedback;
pub mod intake;
