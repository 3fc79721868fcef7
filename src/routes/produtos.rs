use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::produtos::{AddProdutoForm, EditProdutoForm};
use crate::repository::DieselRepository;
use crate::routes::{created, error_response, ok};
use crate::services::produtos::{
    create_produto, get_produto, list_produtos, modify_produto, remove_produto,
};

#[get("/produtos")]
pub async fn show_produtos(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_produtos(repo.get_ref()) {
        Ok(produtos) => ok(produtos),
        Err(err) => error_response(err, "list produtos"),
    }
}

#[get("/produtos/{produto_id}")]
pub async fn show_produto(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let produto_id = path.into_inner();

    match get_produto(repo.get_ref(), produto_id) {
        Ok(produto) => ok(produto),
        Err(err) => error_response(err, &format!("load produto {produto_id}")),
    }
}

#[post("/produtos")]
pub async fn add_produto(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProdutoForm>,
) -> impl Responder {
    match create_produto(repo.get_ref(), form.into_inner()) {
        Ok(produto) => created(produto),
        Err(err) => error_response(err, "create produto"),
    }
}

#[put("/produtos/{produto_id}")]
pub async fn edit_produto(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProdutoForm>,
) -> impl Responder {
    let produto_id = path.into_inner();

    match modify_produto(repo.get_ref(), produto_id, form.into_inner()) {
        Ok(produto) => ok(produto),
        Err(err) => error_response(err, &format!("update produto {produto_id}")),
    }
}

#[delete("/produtos-deletar/{produto_id}")]
/// Delete a product along with its plan associations and their history.
pub async fn delete_produto(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let produto_id = path.into_inner();

    match remove_produto(repo.get_ref(), produto_id) {
        Ok(produto) => ok(produto),
        Err(err) => error_response(err, &format!("delete produto {produto_id}")),
    }
}
