use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::planos::{AddPlanoForm, EditPlanoForm};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::associations;
use crate::services::planos::{
    create_plano, get_plano, list_planos, list_planos_with_produtos, modify_plano, remove_plano,
};

#[get("/planos")]
pub async fn show_planos(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_planos(repo.get_ref()) {
        Ok(planos) => ok(planos),
        Err(err) => error_response(err, "list planos"),
    }
}

#[get("/planos-produtos")]
/// Every plan with its products and attachment history.
pub async fn show_planos_with_produtos(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_planos_with_produtos(repo.get_ref()) {
        Ok(planos) => ok(planos),
        Err(err) => error_response(err, "list planos with produtos"),
    }
}

#[get("/planos/{plano_id}")]
pub async fn show_plano(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let plano_id = path.into_inner();

    match get_plano(repo.get_ref(), plano_id) {
        Ok(plano) => ok(plano),
        Err(err) => error_response(err, &format!("load plano {plano_id}")),
    }
}

#[post("/planos")]
/// Create a plan attached to the product given in `produto_id`.
pub async fn add_plano(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddPlanoForm>,
) -> impl Responder {
    match create_plano(repo.get_ref(), form.into_inner()) {
        Ok(plano) => created(plano),
        Err(err) => error_response(err, "create plano"),
    }
}

#[put("/planos/{plano_id}")]
pub async fn edit_plano(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditPlanoForm>,
) -> impl Responder {
    let plano_id = path.into_inner();

    match modify_plano(repo.get_ref(), plano_id, form.into_inner()) {
        Ok(plano) => ok(plano),
        Err(err) => error_response(err, &format!("update plano {plano_id}")),
    }
}

#[delete("/planos-deletar/{plano_id}")]
pub async fn delete_plano(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let plano_id = path.into_inner();

    match remove_plano(repo.get_ref(), plano_id) {
        Ok(plano) => ok(plano),
        Err(err) => error_response(err, &format!("delete plano {plano_id}")),
    }
}

#[post("/planos/{plano_id}/produtos/{produto_id}")]
pub async fn attach_produto(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (plano_id, produto_id) = path.into_inner();

    match associations::attach_produto(repo.get_ref(), plano_id, produto_id) {
        Ok(plano) => ok(plano),
        Err(err) => error_response(
            err,
            &format!("attach produto {produto_id} to plano {plano_id}"),
        ),
    }
}

#[delete("/planos/{plano_id}/produtos/{produto_id}")]
pub async fn detach_produto(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (plano_id, produto_id) = path.into_inner();

    match associations::detach_produto(repo.get_ref(), plano_id, produto_id) {
        Ok(plano) => ok(plano),
        Err(err) => error_response(
            err,
            &format!("detach produto {produto_id} from plano {plano_id}"),
        ),
    }
}
