pub mod entity;
pub mod invariants;
pub mod mock;

pub use entity::{ProteinRecord, ProteinStats, SavedProteinEntry};
pub use invariants::validate_protein;
pub use mock::{mock_proteins, mock_stats};
