// src/integrations/ml_api/client.rs
//
// Inference backend client: disease prediction, pairwise similarity,
// alignment and sequence property calculation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::DiseasePrediction;
use crate::error::{AppError, AppResult};

/// Model served by default when the caller does not pick one
pub const DEFAULT_MODEL: &str = "lightgbm_best";

/// `POST /predict/disease` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseasePredictionResponse {
    pub predictions: Vec<DiseasePrediction>,
    #[serde(default)]
    pub sequence_length: usize,
    #[serde(default)]
    pub model_used: String,
}

/// `POST /similarity` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityResult {
    pub similarity: f64,
    #[serde(default)]
    pub sequence1_length: usize,
    #[serde(default)]
    pub sequence2_length: usize,
}

/// `POST /align` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentResult {
    pub aligned_sequence1: String,
    pub aligned_sequence2: String,
    pub score: f64,
    pub length: usize,
}

/// `POST /calculate-properties` response (BioPython-derived).
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceProperties {
    pub length: usize,
    pub molecular_weight: f64,
    pub aromaticity: f64,
    pub instability_index: f64,
    pub isoelectric_point: f64,
    pub gravy: f64,
    #[serde(default)]
    pub amino_acid_percent: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    sequence: &'a str,
    model: &'a str,
}

#[derive(Debug, Serialize)]
struct PairRequest<'a> {
    sequence1: &'a str,
    sequence2: &'a str,
}

#[derive(Debug, Serialize)]
struct SequenceRequest<'a> {
    sequence: &'a str,
}

/// Interface the services program against; mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceApi: Send + Sync {
    async fn predict_disease(
        &self,
        sequence: &str,
        model: &str,
    ) -> AppResult<DiseasePredictionResponse>;
    async fn similarity(&self, sequence1: &str, sequence2: &str) -> AppResult<SimilarityResult>;
    async fn align(&self, sequence1: &str, sequence2: &str) -> AppResult<AlignmentResult>;
    async fn calculate_properties(&self, sequence: &str) -> AppResult<SequenceProperties>;
}

pub struct MlApiClient {
    base_url: String,
    http_client: Client,
}

impl MlApiClient {
    pub fn new(base_url: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            http_client,
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl InferenceApi for MlApiClient {
    async fn predict_disease(
        &self,
        sequence: &str,
        model: &str,
    ) -> AppResult<DiseasePredictionResponse> {
        self.post("/predict/disease", &PredictRequest { sequence, model })
            .await
    }

    async fn similarity(&self, sequence1: &str, sequence2: &str) -> AppResult<SimilarityResult> {
        self.post(
            "/similarity",
            &PairRequest {
                sequence1,
                sequence2,
            },
        )
        .await
    }

    async fn align(&self, sequence1: &str, sequence2: &str) -> AppResult<AlignmentResult> {
        self.post(
            "/align",
            &PairRequest {
                sequence1,
                sequence2,
            },
        )
        .await
    }

    async fn calculate_properties(&self, sequence: &str) -> AppResult<SequenceProperties> {
        self.post("/calculate-properties", &SequenceRequest { sequence })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_response_tolerates_missing_metadata() {
        let raw = r#"{"predictions": [{"disease": "Diabetes mellitus", "confidence": 0.91}]}"#;
        let parsed: DiseasePredictionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.predictions.len(), 1);
        assert_eq!(parsed.predictions[0].disease, "Diabetes mellitus");
        assert!(parsed.model_used.is_empty());
    }

    #[test]
    fn test_alignment_response_shape() {
        let raw = r#"{
            "aligned_sequence1": "MKV-LW",
            "aligned_sequence2": "MKVALW",
            "score": 21.5,
            "length": 6
        }"#;
        let parsed: AlignmentResult = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.length, 6);
        assert!(parsed.score > 21.0);
    }
}
