use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, Result};

pub const DEFAULT_SEARCH_PATH: &str = "rest/api/2/search";
pub const DEFAULT_ISSUE_PATH: &str = "rest/api/2/issue";

/// REST path segments, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub search_path: String,
    pub issue_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            issue_path: DEFAULT_ISSUE_PATH.to_string(),
        }
    }
}

impl Endpoints {
    pub fn search_url(&self, base: &Url) -> Result<Url> {
        join(base, &self.search_path, None)
    }

    pub fn issue_url(&self, base: &Url, key: &str) -> Result<Url> {
        join(base, &self.issue_path, Some(key))
    }
}

/// Appends `path` (split on `/`) and an optional verbatim segment to `base`,
/// keeping any path prefix the base already has.
fn join(base: &Url, path: &str, tail: Option<&str>) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(path.split('/').filter(|s| !s.is_empty()))
        .extend(tail);
    Ok(url)
}

/// Parse a caller supplied base URL.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyArgument("base URL"));
    }
    let url = Url::parse(trimmed)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::CannotBeABase(url.to_string()));
    }
    Ok(url)
}
