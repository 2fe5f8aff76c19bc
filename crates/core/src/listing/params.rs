//! Parsing boundary for listing query parameters.
//!
//! Raw query-string values are kept as strings so that a malformed value
//! never fails extraction; each normalised type substitutes its default
//! instead. Repeated keys never fail either: the first value wins.

use crate::ids::parse_id;
use crate::types::DbId;

/// Page number used when the request omits or mangles `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request omits or mangles `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Untyped listing parameters as they appear in the query string.
///
/// Accepts both the camelCase names used by existing clients
/// (`sortBy`, `sortType`, `userId`) and snake_case aliases.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_type: Option<String>,
    pub user_id: Option<String>,
}

impl ListingParams {
    /// Build from decoded query-string pairs.
    ///
    /// The first value seen for a parameter wins, whether it arrived under
    /// its camelCase name or an alias. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "query" | "q" => &mut params.query,
                "sortBy" | "sort_by" => &mut params.sort_by,
                "sortType" | "sort_type" => &mut params.sort_type,
                "userId" | "user_id" => &mut params.user_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    pub fn page_spec(&self) -> PageSpec {
        PageSpec::from_raw(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::from_raw(self.sort_by.as_deref(), self.sort_type.as_deref())
    }

    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::from_raw(self.user_id.as_deref(), self.query.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A validated page window. Both fields are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageSpec {
    /// Build from raw strings, clamping each value independently.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }

    /// Number of records to skip before this window.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Attributes a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Title,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Honour the requested order only when both halves are present and
    /// recognized; any other combination yields the default.
    pub fn from_raw(field: Option<&str>, direction: Option<&str>) -> Self {
        match (
            field.and_then(SortField::parse),
            direction.and_then(SortDirection::parse),
        ) {
            (Some(field), Some(direction)) => Self { field, direction },
            _ => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// User-supplied narrowing. Empty when neither constraint is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub owner_id: Option<DbId>,
    pub text: Option<String>,
}

impl FilterSpec {
    /// A malformed owner id or a blank query is dropped, not rejected.
    pub fn from_raw(owner_id: Option<&str>, text: Option<&str>) -> Self {
        Self {
            owner_id: owner_id.and_then(parse_id),
            text: text
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none() && self.text.is_none()
    }
}

/// Turn free text into an `ILIKE` substring pattern, escaping the
/// wildcard characters `%` and `_` and the escape character `\`.
///
/// ```
/// use vidhub_core::listing::like_pattern;
/// assert_eq!(like_pattern("rust"), "%rust%");
/// assert_eq!(like_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
/// ```
pub fn like_pattern(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
