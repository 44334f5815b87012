pub mod entity;

pub use entity::{
    AnalysisProperties, AnalysisReport, DiseasePrediction, JobStatus, PredictionJob,
    SEQUENCE_PREVIEW_LEN,
};
