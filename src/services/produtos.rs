use chrono::Utc;

use crate::domain::produto::Produto;
use crate::forms::produtos::{AddProdutoForm, EditProdutoForm};
use crate::repository::{ProdutoReader, ProdutoWriter};
use crate::services::{Entity, ServiceError, ServiceResult};

/// Lists every product ordered by id.
pub fn list_produtos<R>(repo: &R) -> ServiceResult<Vec<Produto>>
where
    R: ProdutoReader + ?Sized,
{
    repo.list_produtos().map_err(ServiceError::from)
}

pub fn get_produto<R>(repo: &R, produto_id: i32) -> ServiceResult<Produto>
where
    R: ProdutoReader + ?Sized,
{
    repo.get_produto_by_id(produto_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Produto))?
        .ok_or(ServiceError::NotFound(Entity::Produto))
}

pub fn create_produto<R>(repo: &R, form: AddProdutoForm) -> ServiceResult<Produto>
where
    R: ProdutoWriter + ?Sized,
{
    let new_produto = form
        .into_new_produto()
        .map_err(|err| ServiceError::Validation(err.into()))?;

    let created = repo
        .create_produto(&new_produto)
        .map_err(ServiceError::from)?;
    log::info!("Produto {} created", created.id);

    Ok(created)
}

pub fn modify_produto<R>(repo: &R, produto_id: i32, form: EditProdutoForm) -> ServiceResult<Produto>
where
    R: ProdutoWriter + ?Sized,
{
    let update = form
        .into_update_produto(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Validation(err.into()))?;

    repo.update_produto(produto_id, &update)
        .map_err(|err| ServiceError::for_entity(err, Entity::Produto))
}

/// Deletes a product. Its associations and log rows go with it.
pub fn remove_produto<R>(repo: &R, produto_id: i32) -> ServiceResult<Produto>
where
    R: ProdutoWriter + ?Sized,
{
    let deleted = repo
        .delete_produto(produto_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Produto))?;
    log::info!("Produto {produto_id} deleted");

    Ok(deleted)
}
