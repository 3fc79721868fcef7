//! Attaching products to plans and detaching them again.
//!
//! Lookups run first so a missing entity is reported by name. The join-table
//! change and its log row are then written by a single transactional
//! repository call, and the refreshed aggregate is read back.

use crate::domain::plano::PlanoWithProdutos;
use crate::repository::{PlanoProdutoWriter, PlanoReader, ProdutoReader};
use crate::services::{Entity, ServiceError, ServiceResult};

/// Attaches a product to a plan and records an `Adicionado` log row.
pub fn attach_produto<R>(
    repo: &R,
    plano_id: i32,
    produto_id: i32,
) -> ServiceResult<PlanoWithProdutos>
where
    R: PlanoReader + ProdutoReader + PlanoProdutoWriter + ?Sized,
{
    ensure_pair_exists(repo, plano_id, produto_id)?;

    let log = repo
        .attach_produto(plano_id, produto_id)
        .map_err(ServiceError::from)?;
    log::info!(
        "Produto {produto_id} attached to plano {plano_id} (log {})",
        log.id
    );

    reload_plano(repo, plano_id)
}

/// Detaches a product from a plan and records a `Removido` log row.
///
/// Detaching a product that is not attached succeeds without writing a log
/// row, since nothing changed.
pub fn detach_produto<R>(
    repo: &R,
    plano_id: i32,
    produto_id: i32,
) -> ServiceResult<PlanoWithProdutos>
where
    R: PlanoReader + ProdutoReader + PlanoProdutoWriter + ?Sized,
{
    ensure_pair_exists(repo, plano_id, produto_id)?;

    match repo
        .detach_produto(plano_id, produto_id)
        .map_err(ServiceError::from)?
    {
        Some(log) => log::info!(
            "Produto {produto_id} detached from plano {plano_id} (log {})",
            log.id
        ),
        None => log::info!("Produto {produto_id} was not attached to plano {plano_id}"),
    }

    reload_plano(repo, plano_id)
}

fn ensure_pair_exists<R>(repo: &R, plano_id: i32, produto_id: i32) -> ServiceResult<()>
where
    R: PlanoReader + ProdutoReader + ?Sized,
{
    repo.get_plano_by_id(plano_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Plano))?
        .ok_or(ServiceError::NotFound(Entity::Plano))?;

    repo.get_produto_by_id(produto_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Produto))?
        .ok_or(ServiceError::NotFound(Entity::Produto))?;

    Ok(())
}

fn reload_plano<R>(repo: &R, plano_id: i32) -> ServiceResult<PlanoWithProdutos>
where
    R: PlanoReader + ?Sized,
{
    repo.get_plano_with_produtos(plano_id)
        .map_err(|err| ServiceError::for_entity(err, Entity::Plano))?
        .ok_or(ServiceError::NotFound(Entity::Plano))
}
