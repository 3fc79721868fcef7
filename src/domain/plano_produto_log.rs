use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::pagination::Pagination;

/// Kind of event recorded in the plan/product activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LogAction {
    /// A product was attached to a plan.
    Adicionado,
    /// A product was detached from a plan.
    Removido,
}

impl LogAction {
    /// Label stored in the `action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adicionado => "Adicionado",
            Self::Removido => "Removido",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogAction> for &'static str {
    fn from(value: LogAction) -> Self {
        value.as_str()
    }
}

/// Raised when a stored action label is not one of the known variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log action `{0}`")]
pub struct UnknownLogAction(pub String);

impl TryFrom<&str> for LogAction {
    type Error = UnknownLogAction;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Adicionado" => Ok(Self::Adicionado),
            "Removido" => Ok(Self::Removido),
            other => Err(UnknownLogAction(other.to_string())),
        }
    }
}

/// Immutable audit record of an attach or detach event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanoProdutoLog {
    /// Unique identifier of the log row.
    pub id: i32,
    /// Plan affected by the event.
    pub plano_id: i32,
    /// Product affected by the event.
    pub produto_id: i32,
    /// What happened to the association.
    pub action: LogAction,
    /// When the event was recorded.
    pub created_at: NaiveDateTime,
}

/// Payload required to append a log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPlanoProdutoLog {
    pub plano_id: i32,
    pub produto_id: i32,
    pub action: LogAction,
}

impl NewPlanoProdutoLog {
    pub fn new(plano_id: i32, produto_id: i32, action: LogAction) -> Self {
        Self {
            plano_id,
            produto_id,
            action,
        }
    }
}

/// Log row enriched with the name of the product involved, as listed by the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanoProdutoLogEntry {
    pub plano_id: i32,
    pub produto_id: i32,
    /// Name of the product at the time of listing.
    pub nome: String,
    pub action: LogAction,
    #[serde(serialize_with = "serialize_date_time")]
    pub created_at: NaiveDateTime,
}

fn serialize_date_time<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format("%Y-%m-%d %H:%M:%S"))
}

/// Query definition used to page through the activity log.
#[derive(Debug, Clone)]
pub struct LogListQuery {
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl LogListQuery {
    /// Construct a query over the whole log.
    pub fn new() -> Self {
        Self { pagination: None }
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

impl Default for LogListQuery {
    fn default() -> Self {
        Self::new()
    }
}
