use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::plano::{
    NewPlano as DomainNewPlano, Plano as DomainPlano, UpdatePlano as DomainUpdatePlano,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::planos)]
pub struct Plano {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::planos)]
pub struct NewPlano<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::planos)]
#[diesel(treat_none_as_null = true)]
pub struct UpdatePlano<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Plano> for DomainPlano {
    fn from(value: Plano) -> Self {
        Self {
            id: value.id,
            nome: value.nome,
            descricao: value.descricao,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPlano> for NewPlano<'a> {
    fn from(value: &'a DomainNewPlano) -> Self {
        Self {
            nome: value.nome.as_str(),
            descricao: value.descricao.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePlano> for UpdatePlano<'a> {
    fn from(value: &'a DomainUpdatePlano) -> Self {
        Self {
            nome: value.nome.as_str(),
            descricao: value.descricao.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
