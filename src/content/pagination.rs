use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Document-level fields a version listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    UpdatedAt,
    CreatedAt,
    Version,
    IsActive,
}

impl SortField {
    /// The stored field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::UpdatedAt => "updatedAt",
            SortField::CreatedAt => "createdAt",
            SortField::Version => "version",
            SortField::IsActive => "isActive",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "updatedAt" => Some(SortField::UpdatedAt),
            "createdAt" => Some(SortField::CreatedAt),
            "version" => Some(SortField::Version),
            "isActive" => Some(SortField::IsActive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// MongoDB sort direction.
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

/// Raw query string for version listings, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    /// Number of documents to skip. Validated queries always fit in an `i64`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl TryFrom<ListParams> for PageQuery {
    type Error = AppError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let mut query = PageQuery::default();

        if let Some(raw) = params.page.as_deref() {
            match raw.parse::<u64>() {
                Ok(page) if page >= 1 => query.page = page,
                _ => errors.push(FieldError::new("page", "Page must be a positive integer")),
            }
        }

        if let Some(raw) = params.limit.as_deref() {
            match raw.parse::<u64>() {
                Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => query.limit = limit,
                _ => errors.push(FieldError::new(
                    "limit",
                    format!("Limit must be an integer between 1 and {}", MAX_LIMIT),
                )),
            }
        }

        let skip = (query.page - 1).checked_mul(query.limit);
        if !matches!(skip, Some(n) if n <= i64::MAX as u64) {
            errors.push(FieldError::new("page", "Page is out of range"));
        }

        if let Some(raw) = params.sort_by.as_deref() {
            match SortField::parse(raw) {
                Some(field) => query.sort_by = field,
                None => errors.push(FieldError::new(
                    "sortBy",
                    "sortBy must be one of: updatedAt, createdAt, version, isActive",
                )),
            }
        }

        if let Some(raw) = params.sort_order.as_deref() {
            match raw {
                "asc" => query.sort_order = SortOrder::Asc,
                "desc" => query.sort_order = SortOrder::Desc,
                _ => errors.push(FieldError::new("sortOrder", "sortOrder must be asc or desc")),
            }
        }

        if errors.is_empty() {
            Ok(query)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Pagination metadata returned alongside a page of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(query: &PageQuery, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(query.limit);
        Self {
            current_page: query.page,
            total_pages,
            total_items,
            items_per_page: query.limit,
            has_next: query.page < total_pages,
            has_prev: query.page > 1,
        }
    }
}

/// A page of items plus its metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}
