pub mod enzymes;
pub mod extract;
pub mod motif;
pub mod ranges;
