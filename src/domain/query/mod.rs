// Catalog search: pure filtering and pagination over in-memory records.
//
// All criteria combine with logical AND; result order always preserves
// input order. Page numbers are 1-based and clamp to the valid range
// instead of erroring.

use crate::domain::protein::ProteinRecord;
use serde::{Deserialize, Serialize};

/// Inclusive numeric range; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.unwrap_or(0.0) && value <= self.max.unwrap_or(f64::INFINITY)
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Transient search criteria, rebuilt on every search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query matched against id, name, gene, organism and function
    pub query: String,

    /// Exact-match organism names; empty means no organism restriction
    pub organisms: Vec<String>,

    /// Function keywords; a record matches when its function text contains
    /// any of them
    pub function_keywords: Vec<String>,

    pub length: NumericRange,
    pub weight: NumericRange,
}

impl FilterCriteria {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.organisms.is_empty()
            && self.function_keywords.is_empty()
            && self.length.is_open()
            && self.weight.is_open()
    }
}

fn matches_query(record: &ProteinRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    let gene = record.gene.as_deref().unwrap_or("");

    [
        record.id.as_str(),
        record.name.as_str(),
        gene,
        record.organism.as_str(),
        record.function.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

fn matches(record: &ProteinRecord, criteria: &FilterCriteria) -> bool {
    let query = criteria.query.trim();
    if !query.is_empty() && !matches_query(record, query) {
        return false;
    }

    if !criteria.organisms.is_empty()
        && !criteria.organisms.iter().any(|o| *o == record.organism)
    {
        return false;
    }

    if !criteria.function_keywords.is_empty() {
        let function = record.function.to_lowercase();
        let has_keyword = criteria
            .function_keywords
            .iter()
            .any(|kw| function.contains(&kw.to_lowercase()));
        if !has_keyword {
            return false;
        }
    }

    criteria.length.contains(record.length as f64) && criteria.weight.contains(record.weight)
}

/// Returns the records matching all active criteria, in input order.
pub fn filter(records: &[ProteinRecord], criteria: &FilterCriteria) -> Vec<ProteinRecord> {
    records
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<ProteinRecord>,
    /// The page actually served, after clamping
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices `records` into the requested 1-based page.
///
/// Out-of-range page numbers clamp to `[1, max(total_pages, 1)]`; an empty
/// input yields an empty page 1 of 0.
pub fn paginate(records: &[ProteinRecord], page_size: usize, page: usize) -> Page {
    assert!(page_size > 0, "page_size must be positive");

    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let items = records
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// Explicit, request-scoped search state: the current criteria plus the
/// page cursor. Changing criteria resets the cursor to page 1.
#[derive(Debug, Clone)]
pub struct SearchSession {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

impl SearchSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the criteria and resets to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Runs the session's criteria and cursor against a record set.
    pub fn apply(&self, records: &[ProteinRecord]) -> Page {
        let filtered = filter(records, &self.criteria);
        paginate(&filtered, self.page_size, self.page)
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protein::mock_proteins;

    fn sized_records(n: usize) -> Vec<ProteinRecord> {
        let template = mock_proteins()[0].clone();
        (0..n)
            .map(|i| {
                let mut r = template.clone();
                r.id = format!("P{:05}", i);
                r
            })
            .collect()
    }

    #[test]
    fn test_empty_criteria_returns_all_in_order() {
        let records = mock_proteins();
        let result = filter(&records, &FilterCriteria::default());
        assert_eq!(result, records);
        assert_eq!(result.len(), 8);
    }

    #[test]
    fn test_query_matches_any_of_five_fields() {
        let records = mock_proteins();

        // id substring
        assert!(!filter(&records, &FilterCriteria::with_query("a6jym6")).is_empty());
        // name substring
        assert!(!filter(&records, &FilterCriteria::with_query("sorting nexin")).is_empty());
        // gene substring
        assert!(!filter(&records, &FilterCriteria::with_query("pcsk9")).is_empty());
        // organism substring
        assert!(!filter(&records, &FilterCriteria::with_query("rattus")).is_empty());
        // function substring
        assert!(!filter(&records, &FilterCriteria::with_query("glycosyl")).is_empty());
    }

    #[test]
    fn test_query_results_all_contain_query() {
        let records = mock_proteins();
        let query = "kinase";
        for record in filter(&records, &FilterCriteria::with_query(query)) {
            let gene = record.gene.clone().unwrap_or_default();
            let haystack = format!(
                "{} {} {} {} {}",
                record.id, record.name, gene, record.organism, record.function
            )
            .to_lowercase();
            assert!(haystack.contains(query));
        }
    }

    #[test]
    fn test_unmatched_query_returns_nothing() {
        let records = mock_proteins();
        assert!(filter(&records, &FilterCriteria::with_query("no such protein")).is_empty());
    }

    #[test]
    fn test_organism_filter_is_exact_match() {
        let records = mock_proteins();
        let criteria = FilterCriteria {
            organisms: vec!["Rattus".to_string()],
            ..Default::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "A6JYM6_RAT");

        // A prefix is not an exact organism name
        let criteria = FilterCriteria {
            organisms: vec!["Ratt".to_string()],
            ..Default::default()
        };
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_function_keywords_match_any() {
        let records = mock_proteins();
        let criteria = FilterCriteria {
            function_keywords: vec!["protease".to_string(), "transport".to_string()],
            ..Default::default()
        };
        let result = filter(&records, &criteria);
        for record in &result {
            let function = record.function.to_lowercase();
            assert!(function.contains("protease") || function.contains("transport"));
        }
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_length_range_inclusive() {
        let records = mock_proteins();
        let criteria = FilterCriteria {
            length: NumericRange::new(Some(509.0), Some(838.0)),
            ..Default::default()
        };
        let result = filter(&records, &criteria);
        assert!(!result.is_empty());
        for record in &result {
            assert!(record.length >= 509 && record.length <= 838);
        }
        // Bounds themselves are included
        assert!(result.iter().any(|r| r.length == 509));
        assert!(result.iter().any(|r| r.length == 838));
    }

    #[test]
    fn test_weight_range_missing_bounds_open() {
        let records = mock_proteins();
        let criteria = FilterCriteria {
            weight: NumericRange::new(Some(100_000.0), None),
            ..Default::default()
        };
        let result = filter(&records, &criteria);
        for record in &result {
            assert!(record.weight >= 100_000.0);
        }
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let records = mock_proteins();
        let criteria = FilterCriteria {
            query: "kinase".to_string(),
            organisms: vec!["Saimiri".to_string()],
            ..Default::default()
        };
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "A0A2K6SKD5_SAIBB");
    }

    #[test]
    fn test_paginate_23_records_page_size_10() {
        let records = sized_records(23);

        let first = paginate(&records, 10, 1);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 23);

        let last = paginate(&records, 10, 3);
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].id, "P00020");
    }

    #[test]
    fn test_paginate_clamps_out_of_range() {
        let records = sized_records(23);

        let beyond = paginate(&records, 10, 99);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items.len(), 3);

        let zero = paginate(&records, 10, 0);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items.len(), 10);
    }

    #[test]
    fn test_paginate_empty_input() {
        let page = paginate(&[], 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_session_criteria_change_resets_page() {
        let mut session = SearchSession::new(10);
        session.set_page(3);
        assert_eq!(session.page(), 3);

        session.set_criteria(FilterCriteria::with_query("kinase"));
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn test_session_apply_filters_then_paginates() {
        let records = sized_records(23);
        let mut session = SearchSession::new(10);
        session.set_page(2);

        let page = session.apply(&records);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id, "P00010");
    }
}
