use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product that can be attached to plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Produto {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub nome: String,
    /// Optional longer description shown to clients.
    pub descricao: Option<String>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduto {
    /// Human-readable name of the product.
    pub nome: String,
    /// Optional longer description shown to clients.
    pub descricao: Option<String>,
}

impl NewProduto {
    /// Construct a new product payload with a trimmed name.
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            nome: nome.into().trim().to_string(),
            descricao: None,
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = Some(descricao.into());
        self
    }
}

/// Replacement data applied when updating an existing product.
///
/// A `None` description clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduto {
    /// Updated name of the product.
    pub nome: String,
    /// Updated description of the product.
    pub descricao: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}
