// src/events/mod.rs
//
// In-process event system. Store mutations and domain milestones are
// published here; dependent views (statistics, dashboard) subscribe
// instead of watching storage side effects.

pub mod bus;
pub mod types;

pub use bus::EventBus;
pub use types::{
    AnalysisStored, DomainEvent, PredictionRecorded, ProteinRemoved, ProteinSaved, StoreChanged,
};
