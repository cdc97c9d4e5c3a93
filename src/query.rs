// File: ./src/query.rs
//! Builds the outbound upstream query from filter state.
use crate::error::FinderError;
use crate::model::{RecordKind, SearchFilters};
use url::Url;

/// Fixed number of records requested per page.
pub const PAGE_SIZE: usize = 12;

pub const PARAM_CREDENTIAL: &str = "crtfcKey";
pub const PARAM_DATA_TYPE: &str = "dataType";
pub const PARAM_PAGE_INDEX: &str = "pageIndex";
pub const PARAM_PAGE_UNIT: &str = "pageUnit";
pub const PARAM_CATEGORY: &str = "searchLclasId";
pub const PARAM_TAGS: &str = "hashtags";

/// Upstream endpoints for the two record kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub program: String,
    pub event: String,
}

impl Endpoints {
    pub fn for_kind(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Program => &self.program,
            RecordKind::Event => &self.event,
        }
    }
}

/// Query parameters for one page request, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub kind: RecordKind,
    pub params: Vec<(String, String)>,
}

impl UpstreamQuery {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Full upstream URL for this query.
    pub fn to_url(&self, endpoints: &Endpoints) -> Result<Url, FinderError> {
        let url = Url::parse_with_params(endpoints.for_kind(self.kind), &self.params)?;
        Ok(url)
    }

    /// Same URL with the credential masked, for logs.
    pub fn redacted(&self, endpoints: &Endpoints) -> String {
        let masked = UpstreamQuery {
            kind: self.kind,
            params: self
                .params
                .iter()
                .map(|(k, v)| {
                    if k == PARAM_CREDENTIAL {
                        (k.clone(), "***".to_string())
                    } else {
                        (k.clone(), v.clone())
                    }
                })
                .collect(),
        };
        masked
            .to_url(endpoints)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| endpoints.for_kind(self.kind).to_string())
    }
}

/// Translates filter state and a 1-based page index into upstream parameters.
///
/// An empty credential is a caller bug: credential-less callers must use the
/// sample provider instead.
pub fn build_query(
    filters: &SearchFilters,
    page_index: u32,
    credential: &str,
) -> Result<UpstreamQuery, FinderError> {
    let credential = credential.trim();
    if credential.is_empty() {
        return Err(FinderError::Configuration(
            "an API key is required for live queries".to_string(),
        ));
    }
    if page_index == 0 {
        return Err(FinderError::Configuration(
            "page index starts at 1".to_string(),
        ));
    }
    filters.validate()?;

    let mut params = vec![
        (PARAM_CREDENTIAL.to_string(), credential.to_string()),
        (PARAM_DATA_TYPE.to_string(), "json".to_string()),
        (PARAM_PAGE_INDEX.to_string(), page_index.to_string()),
        (PARAM_PAGE_UNIT.to_string(), PAGE_SIZE.to_string()),
    ];

    if let Some(code) = filters.category_code() {
        params.push((PARAM_CATEGORY.to_string(), code.to_string()));
    }

    let tags = tag_terms(filters);
    if !tags.is_empty() {
        params.push((PARAM_TAGS.to_string(), tags.join(",")));
    }

    Ok(UpstreamQuery {
        kind: filters.kind,
        params,
    })
}

/// Regions, then keyword tokens, then targets. The category never ends up here.
fn tag_terms(filters: &SearchFilters) -> Vec<&str> {
    filters
        .specific_regions()
        .chain(filters.keyword_tokens())
        .chain(
            filters
                .targets
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty()),
        )
        .collect()
}
