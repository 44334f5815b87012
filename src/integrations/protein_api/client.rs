// src/integrations/protein_api/client.rs
//
// Data backend client (proteins CRUD, search, compare, stats, analyze).
//
// Maps wire payloads -> domain records (NO domain mutation). Responses
// arrive wrapped in a `{ data: ... }` envelope; search rows come either
// as a plain array or inside a paginated object, depending on the route.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{ProteinRecord, ProteinStats};
use crate::error::{AppError, AppResult};

/// Query parameters accepted by `GET /proteins`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub id: Option<String>,
    pub name: Option<String>,
    pub gene: Option<String>,
    pub family: Option<String>,
    pub organism: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchFilters {
    /// Routes a free-text query the way the search page does: accession-
    /// looking strings (leading `P`, an underscore, or an `A0A` prefix
    /// fragment) go to the `id` parameter, everything else to `name`.
    pub fn from_query(query: &str) -> Self {
        let mut filters = Self {
            limit: Some(20),
            offset: Some(0),
            ..Self::default()
        };

        let query = query.trim();
        if query.is_empty() {
            return filters;
        }

        if query.starts_with('P') || query.contains('_') || query.contains("A0A") {
            filters.id = Some(query.to_string());
        } else {
            filters.name = Some(query.to_string());
        }
        filters
    }

    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.id {
            pairs.push(("id", v.clone()));
        }
        if let Some(v) = &self.name {
            pairs.push(("name", v.clone()));
        }
        if let Some(v) = &self.gene {
            pairs.push(("gene", v.clone()));
        }
        if let Some(v) = &self.family {
            pairs.push(("family", v.clone()));
        }
        if let Some(v) = &self.organism {
            pairs.push(("organism", v.clone()));
        }
        if let Some(v) = self.limit {
            pairs.push(("limit", v.to_string()));
        }
        if let Some(v) = self.offset {
            pairs.push(("offset", v.to_string()));
        }
        pairs
    }
}

/// Outbound protein creation payload (`POST /proteins`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProtein {
    pub id: String,
    pub name: String,
    /// The backend stores sequences as an array of chunks
    pub seq: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrophobicity_gravy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_interactors: Option<u32>,
}

impl NewProtein {
    pub fn from_sequence(id: String, name: String, sequence: String) -> Self {
        Self {
            id,
            name,
            seq: vec![sequence],
            ..Self::default()
        }
    }
}

/// Partial update payload (`PUT /proteins/{id}`); absent fields are kept.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProteinUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// Result of `POST /proteins/compare`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinComparison {
    pub protein_1: ProteinRecord,
    pub protein_2: ProteinRecord,
    pub similarity: f64,
    pub compared_at: Option<String>,
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Protein row as the backend serializes it
#[derive(Debug, Deserialize)]
struct ProteinData {
    id: String,
    name: String,
    gene: Option<String>,
    taxo: Option<String>,
    organism: Option<String>,
    length: Option<u32>,
    family: Option<String>,
    bio_process: Option<String>,
    function: Option<String>,
    mw: Option<f64>,
    #[serde(default)]
    seq: Vec<String>,
    pi: Option<f64>,
    hydrophobicity_gravy: Option<f64>,
}

/// Search rows arrive bare or paginated depending on the route
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProteinRows {
    Plain(Vec<ProteinData>),
    Paginated { proteins: Vec<ProteinData> },
}

impl ProteinRows {
    fn into_rows(self) -> Vec<ProteinData> {
        match self {
            ProteinRows::Plain(rows) => rows,
            ProteinRows::Paginated { proteins } => proteins,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ComparisonData {
    protein_1: ProteinData,
    protein_2: ProteinData,
    #[serde(default)]
    similarity: f64,
    compared_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProteinStatsData {
    total_proteins: u64,
    avg_length: f64,
    avg_mw: f64,
    avg_pi: f64,
    avg_n_interactors: f64,
    avg_hydrophobicity: f64,
    total_genes: u64,
    total_families: u64,
}

fn map_protein(data: ProteinData) -> ProteinRecord {
    let sequence = if data.seq.is_empty() {
        None
    } else {
        Some(data.seq.concat())
    };
    let length = data
        .length
        .or_else(|| sequence.as_ref().map(|s| s.len() as u32))
        .unwrap_or(0);

    ProteinRecord {
        id: data.id,
        name: data.name,
        gene: data.gene,
        organism: data.taxo.or(data.organism).unwrap_or_default(),
        length,
        weight: data.mw.unwrap_or(0.0),
        function: data.function.or(data.bio_process).unwrap_or_default(),
        sequence,
        family: data.family,
        isoelectric_point: data.pi,
        hydrophobicity: data.hydrophobicity_gravy,
    }
}

fn map_stats(data: ProteinStatsData) -> ProteinStats {
    ProteinStats {
        total_proteins: data.total_proteins,
        avg_length: data.avg_length,
        avg_mw: data.avg_mw,
        avg_pi: data.avg_pi,
        avg_n_interactors: data.avg_n_interactors,
        avg_hydrophobicity: data.avg_hydrophobicity,
        total_genes: data.total_genes,
        total_families: data.total_families,
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// Interface the services program against; mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProteinApi: Send + Sync {
    async fn search(&self, filters: &SearchFilters) -> AppResult<Vec<ProteinRecord>>;
    async fn get(&self, id: &str) -> AppResult<ProteinRecord>;
    async fn create(&self, protein: &NewProtein) -> AppResult<()>;
    async fn update(&self, id: &str, update: &ProteinUpdate) -> AppResult<()>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn bulk_create(&self, proteins: &[NewProtein]) -> AppResult<usize>;
    async fn compare(&self, id_1: &str, id_2: &str) -> AppResult<ProteinComparison>;
    async fn stats(&self) -> AppResult<ProteinStats>;
}

pub struct ProteinApiClient {
    base_url: String,
    http_client: Client,
}

impl ProteinApiClient {
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-2xx response into the uniform API error
    async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ProteinApi for ProteinApiClient {
    async fn search(&self, filters: &SearchFilters) -> AppResult<Vec<ProteinRecord>> {
        let response = self
            .http_client
            .get(self.url("/proteins"))
            .query(&filters.to_query_pairs())
            .send()
            .await?;

        let envelope: Envelope<ProteinRows> = Self::check(response).await?.json().await?;
        Ok(envelope
            .data
            .into_rows()
            .into_iter()
            .map(map_protein)
            .collect())
    }

    async fn get(&self, id: &str) -> AppResult<ProteinRecord> {
        let response = self
            .http_client
            .get(self.url(&format!("/proteins/{}", id)))
            .send()
            .await?;

        let envelope: Envelope<ProteinData> = Self::check(response).await?.json().await?;
        Ok(map_protein(envelope.data))
    }

    async fn create(&self, protein: &NewProtein) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url("/proteins"))
            .json(protein)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, id: &str, update: &ProteinUpdate) -> AppResult<()> {
        let response = self
            .http_client
            .put(self.url(&format!("/proteins/{}", id)))
            .json(update)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let response = self
            .http_client
            .delete(self.url(&format!("/proteins/{}", id)))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn bulk_create(&self, proteins: &[NewProtein]) -> AppResult<usize> {
        let response = self
            .http_client
            .post(self.url("/proteins/bulk"))
            .json(proteins)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(proteins.len())
    }

    async fn compare(&self, id_1: &str, id_2: &str) -> AppResult<ProteinComparison> {
        let body = serde_json::json!({
            "protein_id_1": id_1,
            "protein_id_2": id_2,
        });

        let response = self
            .http_client
            .post(self.url("/proteins/compare"))
            .json(&body)
            .send()
            .await?;

        let envelope: Envelope<ComparisonData> = Self::check(response).await?.json().await?;
        let data = envelope.data;
        Ok(ProteinComparison {
            protein_1: map_protein(data.protein_1),
            protein_2: map_protein(data.protein_2),
            similarity: data.similarity,
            compared_at: data.compared_at,
        })
    }

    async fn stats(&self) -> AppResult<ProteinStats> {
        let response = self
            .http_client
            .get(self.url("/proteins/stats"))
            .send()
            .await?;

        let envelope: Envelope<ProteinStatsData> = Self::check(response).await?.json().await?;
        Ok(map_stats(envelope.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accession_queries_route_to_id() {
        assert_eq!(
            SearchFilters::from_query("P01308").id,
            Some("P01308".to_string())
        );
        assert_eq!(
            SearchFilters::from_query("A6JYM6_RAT").id,
            Some("A6JYM6_RAT".to_string())
        );
        assert!(SearchFilters::from_query("xyzA0A123").id.is_some());
    }

    #[test]
    fn test_name_queries_route_to_name() {
        let filters = SearchFilters::from_query("insulin");
        assert!(filters.id.is_none());
        assert_eq!(filters.name, Some("insulin".to_string()));
    }

    #[test]
    fn test_empty_query_sets_only_paging() {
        let filters = SearchFilters::from_query("  ");
        assert!(filters.id.is_none() && filters.name.is_none());
        assert_eq!(filters.limit, Some(20));
        assert_eq!(filters.offset, Some(0));
    }

    #[test]
    fn test_map_protein_joins_chunks_and_prefers_taxo() {
        let data = ProteinData {
            id: "P01308".to_string(),
            name: "Insulin".to_string(),
            gene: Some("INS".to_string()),
            taxo: Some("Homo sapiens".to_string()),
            organism: Some("ignored".to_string()),
            length: None,
            family: None,
            bio_process: None,
            function: Some("Hormone".to_string()),
            mw: Some(12000.0),
            seq: vec!["MALW".to_string(), "MRLL".to_string()],
            pi: Some(5.4),
            hydrophobicity_gravy: None,
        };

        let record = map_protein(data);
        assert_eq!(record.organism, "Homo sapiens");
        assert_eq!(record.sequence.as_deref(), Some("MALWMRLL"));
        // length falls back to the joined sequence
        assert_eq!(record.length, 8);
    }

    #[test]
    fn test_map_protein_function_falls_back_to_bio_process() {
        let data = ProteinData {
            id: "X".to_string(),
            name: "Y".to_string(),
            gene: None,
            taxo: None,
            organism: None,
            length: Some(10),
            family: None,
            bio_process: Some("Oxygen transport".to_string()),
            function: None,
            mw: None,
            seq: vec![],
            pi: None,
            hydrophobicity_gravy: None,
        };

        let record = map_protein(data);
        assert_eq!(record.function, "Oxygen transport");
        assert!(record.sequence.is_none());
    }

    #[test]
    fn test_rows_unwrap_both_shapes() {
        let plain: ProteinRows = serde_json::from_str(r#"[]"#).unwrap();
        assert!(plain.into_rows().is_empty());

        let paginated: ProteinRows =
            serde_json::from_str(r#"{"proteins": [], "total": 0}"#).unwrap();
        assert!(paginated.into_rows().is_empty());
    }
}
