use chrono::{DateTime, Utc};

use crate::{Version, VersionId};

/// Queryable columns of the version collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    Id,
    ProjectId,
    VersionNumber,
    CreatedAt,
}

impl VersionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionField::Id => "id",
            VersionField::ProjectId => "project_id",
            VersionField::VersionNumber => "version_number",
            VersionField::CreatedAt => "created_at",
        }
    }

    /// The value of this column on `version`.
    pub fn value_of(&self, version: &Version) -> FieldValue {
        match self {
            VersionField::Id => FieldValue::Id(version.id),
            VersionField::ProjectId => FieldValue::Text(version.project_id.clone()),
            VersionField::VersionNumber => FieldValue::Number(version.version_number),
            VersionField::CreatedAt => FieldValue::Timestamp(version.created_at),
        }
    }
}

/// A column value used in filters and ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Id(VersionId),
    Text(String),
    Number(u32),
    Timestamp(DateTime<Utc>),
}

impl From<VersionId> for FieldValue {
    fn from(id: VersionId) -> Self {
        FieldValue::Id(id)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(t)
    }
}

/// A row predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Column equals value.
    Eq(VersionField, FieldValue),
    /// Timestamp column is at or after the threshold.
    Since(VersionField, DateTime<Utc>),
}

impl Filter {
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Filter::Eq(field, value) => field.value_of(version) == *value,
            Filter::Since(field, threshold) => {
                field.value_of(version) >= FieldValue::Timestamp(*threshold)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A select over the version collection.
///
/// ```
/// use draftsmith_history::store::{Query, SortDirection, VersionField};
///
/// let newest = Query::new()
///     .eq(VersionField::ProjectId, "landing")
///     .order_by(VersionField::VersionNumber, SortDirection::Descending)
///     .limit(1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<(VersionField, SortDirection)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows whose `field` equals `value`.
    pub fn eq(mut self, field: VersionField, value: impl Into<FieldValue>) -> Self {
        self.filters.push(Filter::Eq(field, value.into()));
        self
    }

    /// Keep rows whose timestamp `field` is at or after `threshold`.
    pub fn since(mut self, field: VersionField, threshold: DateTime<Utc>) -> Self {
        self.filters.push(Filter::Since(field, threshold));
        self
    }

    pub fn order_by(mut self, field: VersionField, direction: SortDirection) -> Self {
        self.order = Some((field, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.filters.iter().all(|f| f.matches(version))
    }
}
