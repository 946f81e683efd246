//! Offset pagination parameters (`?skip=&limit=`)

use serde::Deserialize;

/// Default page size
pub const DEFAULT_LIMIT: u32 = 20;

/// `skip`/`limit` query parameters
///
/// Both are unsigned, so negative values never reach SQL. Missing values fall
/// back to `skip = 0`, `limit = 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// `LIMIT` bind value
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    /// `OFFSET` bind value
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Pagination::default());
        assert_eq!(page.limit(), 20);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_partial() {
        let page: Pagination = serde_json::from_str(r#"{"skip": 5}"#).unwrap();
        assert_eq!(page, Pagination::new(5, 20));
    }

    #[test]
    fn test_rejects_negative() {
        assert!(serde_json::from_str::<Pagination>(r#"{"skip": -1}"#).is_err());
        assert!(serde_json::from_str::<Pagination>(r#"{"limit": -1}"#).is_err());
    }
}
