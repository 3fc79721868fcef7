use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::plano_produto_log::{
    LogAction, NewPlanoProdutoLog as DomainNewPlanoProdutoLog,
    PlanoProdutoLog as DomainPlanoProdutoLog, UnknownLogAction,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::plano_produto_logs,
    belongs_to(super::plano::Plano, foreign_key = plano_id),
    belongs_to(super::produto::Produto, foreign_key = produto_id)
)]
pub struct PlanoProdutoLog {
    pub id: i32,
    pub plano_id: i32,
    pub produto_id: i32,
    pub action: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::plano_produto_logs)]
pub struct NewPlanoProdutoLog {
    pub plano_id: i32,
    pub produto_id: i32,
    pub action: &'static str,
}

impl TryFrom<PlanoProdutoLog> for DomainPlanoProdutoLog {
    type Error = UnknownLogAction;

    fn try_from(value: PlanoProdutoLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            plano_id: value.plano_id,
            produto_id: value.produto_id,
            action: LogAction::try_from(value.action.as_str())?,
            created_at: value.created_at,
        })
    }
}

impl From<&DomainNewPlanoProdutoLog> for NewPlanoProdutoLog {
    fn from(value: &DomainNewPlanoProdutoLog) -> Self {
        Self {
            plano_id: value.plano_id,
            produto_id: value.produto_id,
            action: value.action.into(),
        }
    }
}
