use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::plano_produto_log::PlanoProdutoLog;
use crate::domain::produto::Produto;

/// Domain representation of a subscription plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plano {
    /// Unique identifier of the plan.
    pub id: i32,
    /// Human-readable name of the plan.
    pub nome: String,
    /// Optional longer description shown to clients.
    pub descricao: Option<String>,
    /// Timestamp for when the plan record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the plan record.
    pub updated_at: NaiveDateTime,
}

/// A plan together with the products attached to it and its activity log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanoWithProdutos {
    /// The plan itself, serialized inline.
    #[serde(flatten)]
    pub plano: Plano,
    /// Products currently attached, ordered by product id.
    pub produtos: Vec<Produto>,
    /// Attach/detach history, oldest first.
    pub logs: Vec<PlanoProdutoLog>,
}

impl PlanoWithProdutos {
    /// Wrap a plan without products or history.
    pub fn new(plano: Plano) -> Self {
        Self {
            plano,
            produtos: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Whether the product with `produto_id` is currently attached.
    pub fn contains_produto(&self, produto_id: i32) -> bool {
        self.produtos.iter().any(|produto| produto.id == produto_id)
    }
}

/// Payload required to insert a new plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlano {
    /// Human-readable name of the plan.
    pub nome: String,
    /// Optional longer description shown to clients.
    pub descricao: Option<String>,
}

impl NewPlano {
    /// Construct a new plan payload with a trimmed name.
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            nome: nome.into().trim().to_string(),
            descricao: None,
        }
    }

    /// Attach a descriptive text to the plan payload.
    pub fn with_descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = Some(descricao.into());
        self
    }
}

/// Replacement data applied when updating an existing plan.
///
/// A `None` description clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlano {
    /// Updated name of the plan.
    pub nome: String,
    /// Updated description of the plan.
    pub descricao: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}
