use chrono::Utc;

use crate::domain::plano::{Plano, PlanoWithProdutos};
use crate::forms::FieldErrors;
use crate::forms::planos::{AddPlanoForm, EditPlanoForm, PRODUTO_ID_MISSING};
use crate::repository::{PlanoReader, PlanoWriter, RepositoryError};
use crate::services::{Entity, ServiceError, ServiceResult};

/// Lists every plan ordered by id.
pub fn list_planos<R>(repo: &R) -> ServiceResult<Vec<Plano>>
where
    R: PlanoReader + ?Sized,
{
    repo.list_planos().map_err(ServiceError::from)
}

/// Fetches a single plan.
pub fn get_plano<R>(repo: &R, plano_id: i32) -> ServiceResult<Plano>
where
    R: PlanoReader + ?Sized,
{
    repo.get_plano_by_id(plano_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Plano))?
        .ok_or(ServiceError::NotFound(Entity::Plano))
}

/// Lists every plan with its products and activity log.
pub fn list_planos_with_produtos<R>(repo: &R) -> ServiceResult<Vec<PlanoWithProdutos>>
where
    R: PlanoReader + ?Sized,
{
    repo.list_planos_with_produtos().map_err(ServiceError::from)
}

/// Creates a plan already attached to the product named in the form.
///
/// The product lookup, the insert, the attachment and its `Adicionado` log
/// row all run in one transaction. A product that does not exist is reported
/// against `produto_id`.
pub fn create_plano<R>(repo: &R, form: AddPlanoForm) -> ServiceResult<PlanoWithProdutos>
where
    R: PlanoWriter + ?Sized,
{
    let payload = form
        .into_new_plano()
        .map_err(|err| ServiceError::Validation(err.into()))?;

    let created = repo
        .create_plano(&payload.plano, payload.produto_id)
        .map_err(|err| match err {
            RepositoryError::MissingReference(_) => ServiceError::Validation(
                FieldErrors::single("produto_id", PRODUTO_ID_MISSING),
            ),
            other => ServiceError::from(other),
        })?;
    log::info!(
        "Plano {} created with produto {}",
        created.plano.id,
        payload.produto_id
    );

    Ok(created)
}

/// Replaces the name and description of an existing plan.
pub fn modify_plano<R>(repo: &R, plano_id: i32, form: EditPlanoForm) -> ServiceResult<Plano>
where
    R: PlanoWriter + ?Sized,
{
    let update = form
        .into_update_plano(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Validation(err.into()))?;

    repo.update_plano(plano_id, &update)
        .map_err(|err| ServiceError::for_entity(err, Entity::Plano))
}

/// Deletes a plan, returning the removed record.
pub fn remove_plano<R>(repo: &R, plano_id: i32) -> ServiceResult<Plano>
where
    R: PlanoWriter + ?Sized,
{
    let deleted = repo
        .delete_plano(plano_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Plano))?;
    log::info!("Plano {plano_id} deleted");

    Ok(deleted)
}
