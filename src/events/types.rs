// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// STORE EVENTS
// ============================================================================

/// Emitted whenever a store collection is overwritten.
/// Carries the new version so subscribers can skip stale notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub key: String,
    pub version: u64,
}

impl StoreChanged {
    pub fn new(key: String, version: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            key,
            version,
        }
    }
}

impl DomainEvent for StoreChanged {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "StoreChanged"
    }
}

// ============================================================================
// SAVED COLLECTION EVENTS
// ============================================================================

/// Emitted when a protein is added to the local collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub protein_id: String,
    pub name: String,
}

impl ProteinSaved {
    pub fn new(protein_id: String, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            protein_id,
            name,
        }
    }
}

impl DomainEvent for ProteinSaved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ProteinSaved"
    }
}

/// Emitted when a protein is removed from the local collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub protein_id: String,
}

impl ProteinRemoved {
    pub fn new(protein_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            protein_id,
        }
    }
}

impl DomainEvent for ProteinRemoved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ProteinRemoved"
    }
}

// ============================================================================
// PREDICTION EVENTS
// ============================================================================

/// Emitted when a prediction job lands in the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecorded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: String,
    pub job_name: String,
}

impl PredictionRecorded {
    pub fn new(job_id: String, job_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
            job_name,
        }
    }
}

impl DomainEvent for PredictionRecorded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PredictionRecorded"
    }
}

/// Emitted when an analysis report replaces the most-recent result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStored {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub job_id: String,
}

impl AnalysisStored {
    pub fn new(job_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            job_id,
        }
    }
}

impl DomainEvent for AnalysisStored {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "AnalysisStored"
    }
}
