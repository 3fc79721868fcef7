use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::produto::{NewProduto, UpdateProduto};
use crate::forms::{
    FieldErrors, NOME_MAX_LEN_VALIDATOR, NOME_REQUIRED, sanitize_descricao, sanitize_inline_text,
};

/// Result type returned by the product form helpers.
pub type ProdutoFormResult<T> = Result<T, ProdutoFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProdutoFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyNome,
}

impl From<ProdutoFormError> for FieldErrors {
    fn from(value: ProdutoFormError) -> Self {
        match value {
            ProdutoFormError::Validation(errors) => FieldErrors::from(&errors),
            ProdutoFormError::EmptyNome => FieldErrors::single("nome", NOME_REQUIRED),
        }
    }
}

/// Body of `POST /produtos`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddProdutoForm {
    #[validate(
        required(message = "O campo nome é obrigatório."),
        length(max = NOME_MAX_LEN_VALIDATOR, message = "O nome não pode ter mais de 255 caracteres.")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl AddProdutoForm {
    /// Validates and sanitizes the payload into a domain `NewProduto`.
    pub fn into_new_produto(self) -> ProdutoFormResult<NewProduto> {
        self.validate()?;

        let nome = sanitize_nome(self.nome.as_deref())?;

        let mut produto = NewProduto::new(nome);
        if let Some(descricao) = sanitize_descricao(self.descricao.as_deref()) {
            produto = produto.with_descricao(descricao);
        }

        Ok(produto)
    }
}

/// Body of `PUT /produtos/{id}`. Omitting `descricao` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProdutoForm {
    #[validate(
        required(message = "O campo nome é obrigatório."),
        length(max = NOME_MAX_LEN_VALIDATOR, message = "O nome não pode ter mais de 255 caracteres.")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl EditProdutoForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduto`.
    pub fn into_update_produto(
        self,
        updated_at: NaiveDateTime,
    ) -> ProdutoFormResult<UpdateProduto> {
        self.validate()?;

        let nome = sanitize_nome(self.nome.as_deref())?;

        Ok(UpdateProduto {
            nome,
            descricao: sanitize_descricao(self.descricao.as_deref()),
            updated_at,
        })
    }
}

fn sanitize_nome(nome: Option<&str>) -> ProdutoFormResult<String> {
    let sanitized = nome.map(sanitize_inline_text).unwrap_or_default();
    if sanitized.is_empty() {
        return Err(ProdutoFormError::EmptyNome);
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn add_produto_form_sanitizes_and_converts() {
        let form = AddProdutoForm {
            nome: Some("  WhatsApp \t Ilimitado ".to_string()),
            descricao: Some("Mensagens e chamadas\n\n\nilimitadas no WhatsApp.".to_string()),
        };

        let produto = form
            .into_new_produto()
            .expect("expected conversion to succeed");

        assert_eq!(produto.nome, "WhatsApp Ilimitado");
        assert_eq!(
            produto.descricao.as_deref(),
            Some("Mensagens e chamadas\n\nilimitadas no WhatsApp.")
        );
    }

    #[test]
    fn add_produto_form_requires_name() {
        let errors = match AddProdutoForm::default().into_new_produto() {
            Err(err) => FieldErrors::from(err),
            Ok(_) => panic!("expected validation to fail"),
        };

        assert_eq!(errors.get("nome"), Some(&[NOME_REQUIRED.to_string()][..]));
    }

    #[test]
    fn add_produto_form_rejects_blank_name() {
        let form = AddProdutoForm {
            nome: Some("\u{7}  ".to_string()),
            descricao: None,
        };

        assert!(matches!(
            form.into_new_produto(),
            Err(ProdutoFormError::EmptyNome)
        ));
    }

    #[test]
    fn edit_produto_form_builds_update() {
        let updated_at = NaiveDate::from_ymd_opt(2025, 1, 15)
            .and_then(|date| date.and_hms_opt(8, 30, 0))
            .expect("valid timestamp");
        let form = EditProdutoForm {
            nome: Some("Internet".to_string()),
            descricao: Some("15GB de internet + 5GB para YouTube".to_string()),
        };

        let update = form
            .into_update_produto(updated_at)
            .expect("expected conversion to succeed");

        assert_eq!(update.nome, "Internet");
        assert_eq!(
            update.descricao.as_deref(),
            Some("15GB de internet + 5GB para YouTube")
        );
        assert_eq!(update.updated_at, updated_at);
    }

    #[test]
    fn edit_produto_form_rejects_long_name() {
        let form = EditProdutoForm {
            nome: Some("x".repeat(300)),
            descricao: None,
        };

        let result = form.into_update_produto(NaiveDateTime::default());

        assert!(matches!(result, Err(ProdutoFormError::Validation(_))));
    }
}
