use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::produto::{
    NewProduto as DomainNewProduto, Produto as DomainProduto,
    UpdateProduto as DomainUpdateProduto,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::produtos)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::produtos)]
pub struct NewProduto<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::produtos)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduto<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Produto> for DomainProduto {
    fn from(value: Produto) -> Self {
        Self {
            id: value.id,
            nome: value.nome,
            descricao: value.descricao,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduto> for NewProduto<'a> {
    fn from(value: &'a DomainNewProduto) -> Self {
        Self {
            nome: value.nome.as_str(),
            descricao: value.descricao.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduto> for UpdateProduto<'a> {
    fn from(value: &'a DomainUpdateProduto) -> Self {
        Self {
            nome: value.nome.as_str(),
            descricao: value.descricao.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
