// src/config.rs
//
// Endpoint and storage configuration. Base URLs are derived once from a
// host name using the same local/remote heuristic the hosted UI applies
// to its own location; they are not configurable individually.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "localhost";

const API_PORT: u16 = 8080;
const ML_PORT: u16 = 5001;

/// Base URLs for the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    /// Data/CRUD backend, e.g. `http://localhost:8080/api/v1`
    pub api_base_url: String,
    /// ML inference backend, e.g. `http://localhost:5001`
    pub ml_base_url: String,
}

impl ApiEndpoints {
    /// Resolves both base URLs from a host name. Loopback spellings
    /// collapse to `localhost`; any other host keeps its name with the
    /// standard ports.
    pub fn for_host(host: &str) -> Self {
        let host = if is_local(host) { DEFAULT_HOST } else { host };
        Self {
            api_base_url: format!("http://{}:{}/api/v1", host, API_PORT),
            ml_base_url: format!("http://{}:{}", host, ML_PORT),
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::for_host(DEFAULT_HOST)
    }
}

fn is_local(host: &str) -> bool {
    host == "localhost" || host == "127.0.0.1"
}

/// Platform data directory for the JSON store
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("proteinhub"))
        .unwrap_or_else(|| PathBuf::from(".proteinhub"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_collapse_to_localhost() {
        let endpoints = ApiEndpoints::for_host("127.0.0.1");
        assert_eq!(endpoints.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(endpoints.ml_base_url, "http://localhost:5001");
    }

    #[test]
    fn test_remote_host_keeps_its_name() {
        let endpoints = ApiEndpoints::for_host("lab.example.org");
        assert_eq!(endpoints.api_base_url, "http://lab.example.org:8080/api/v1");
        assert_eq!(endpoints.ml_base_url, "http://lab.example.org:5001");
    }
}
