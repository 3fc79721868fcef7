use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::plano::{NewPlano, UpdatePlano};
use crate::forms::{
    FieldErrors, NOME_MAX_LEN_VALIDATOR, NOME_REQUIRED, sanitize_descricao, sanitize_inline_text,
};

pub(crate) const PRODUTO_ID_REQUIRED: &str = "O campo produto_id é obrigatório.";
pub(crate) const PRODUTO_ID_NOT_INTEGER: &str = "O campo produto_id deve ser um número inteiro.";
pub(crate) const PRODUTO_ID_NOT_POSITIVE: &str =
    "O campo produto_id deve ser um número inteiro positivo.";
pub(crate) const PRODUTO_ID_MISSING: &str = "O produto associado não existe.";

/// Result type returned by the plan form helpers.
pub type PlanoFormResult<T> = Result<T, PlanoFormError>;

/// Errors that can occur while processing plan payloads.
#[derive(Debug, Error)]
pub enum PlanoFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Field-level failures collected over the whole payload.
    #[error("invalid fields: {0}")]
    Fields(FieldErrors),
    /// The provided name is empty after sanitization.
    #[error("plan name cannot be empty")]
    EmptyNome,
}

impl From<PlanoFormError> for FieldErrors {
    fn from(value: PlanoFormError) -> Self {
        match value {
            PlanoFormError::Validation(errors) => FieldErrors::from(&errors),
            PlanoFormError::Fields(errors) => errors,
            PlanoFormError::EmptyNome => FieldErrors::single("nome", NOME_REQUIRED),
        }
    }
}

/// Body of `POST /planos`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddPlanoForm {
    #[validate(
        required(message = "O campo nome é obrigatório."),
        length(max = NOME_MAX_LEN_VALIDATOR, message = "O nome não pode ter mais de 255 caracteres.")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    /// Product attached to the plan on creation. Any JSON value is accepted
    /// here and checked by [`parse_produto_id`].
    pub produto_id: Option<Value>,
}

/// Sanitized payload for a new plan and the product it starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanoPayload {
    pub plano: NewPlano,
    pub produto_id: i32,
}

impl AddPlanoForm {
    /// Validates and sanitizes the payload into a domain `NewPlano`.
    ///
    /// Every invalid field is reported, not only the first one.
    pub fn into_new_plano(self) -> PlanoFormResult<NewPlanoPayload> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(err) => FieldErrors::from(&err),
        };

        let nome = self
            .nome
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();
        if nome.is_empty() && errors.get("nome").is_none() {
            errors.add("nome", NOME_REQUIRED);
        }

        match parse_produto_id(self.produto_id.as_ref()) {
            Ok(produto_id) if errors.is_empty() => {
                let mut plano = NewPlano::new(nome);
                if let Some(descricao) = sanitize_descricao(self.descricao.as_deref()) {
                    plano = plano.with_descricao(descricao);
                }
                Ok(NewPlanoPayload { plano, produto_id })
            }
            Ok(_) => Err(PlanoFormError::Fields(errors)),
            Err(message) => {
                errors.add("produto_id", message);
                Err(PlanoFormError::Fields(errors))
            }
        }
    }
}

/// Reads a product id from a number or a numeric string.
pub(crate) fn parse_produto_id(value: Option<&Value>) -> Result<i32, &'static str> {
    let value = match value {
        None | Some(Value::Null) => return Err(PRODUTO_ID_REQUIRED),
        Some(value) => value,
    };

    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or(PRODUTO_ID_NOT_INTEGER)?;

    if id < 1 {
        return Err(PRODUTO_ID_NOT_POSITIVE);
    }
    // Ids beyond the column range cannot name a stored product.
    i32::try_from(id).map_err(|_| PRODUTO_ID_MISSING)
}

/// Body of `PUT /planos/{id}`. Omitting `descricao` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditPlanoForm {
    #[validate(
        required(message = "O campo nome é obrigatório."),
        length(max = NOME_MAX_LEN_VALIDATOR, message = "O nome não pode ter mais de 255 caracteres.")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl EditPlanoForm {
    /// Validates and sanitizes the payload into a domain `UpdatePlano`.
    pub fn into_update_plano(self, updated_at: NaiveDateTime) -> PlanoFormResult<UpdatePlano> {
        self.validate()?;

        let nome = sanitize_nome(self.nome.as_deref())?;

        Ok(UpdatePlano {
            nome,
            descricao: sanitize_descricao(self.descricao.as_deref()),
            updated_at,
        })
    }
}

fn sanitize_nome(nome: Option<&str>) -> PlanoFormResult<String> {
    let sanitized = nome.map(sanitize_inline_text).unwrap_or_default();
    if sanitized.is_empty() {
        return Err(PlanoFormError::EmptyNome);
    }
    Ok(sanitized)
}
