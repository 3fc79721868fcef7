//! Demo catalog used to populate an empty database.

use crate::domain::plano::PlanoWithProdutos;
use crate::forms::planos::AddPlanoForm;
use crate::forms::produtos::AddProdutoForm;
use crate::repository::{PlanoProdutoWriter, PlanoReader, PlanoWriter, ProdutoReader, ProdutoWriter};
use crate::services::{ServiceResult, associations, planos, produtos};

const PRODUTOS: [(&str, &str); 3] = [
    (
        "Internet",
        "25GB de internet + 25GB para redes sociais e vídeos.",
    ),
    (
        "Internet",
        "15GB de internet + 5GB para YouTube + 5GB de bônus.",
    ),
    (
        "WhatsApp Ilimitado",
        "Mensagens e chamadas ilimitadas no WhatsApp.",
    ),
];

const PLANO_POS: (&str, &str) = (
    "Claro Pós 50GB",
    "Plano pós-pago com 50GB de internet e aplicativos ilimitados.",
);
const PLANO_CONTROLE: (&str, &str) = (
    "Claro Controle 25GB",
    "Plano controle com 25GB de internet e WhatsApp ilimitado.",
);

/// Insert the demo plans and products unless a plan already exists.
///
/// The first product goes to "Claro Pós 50GB" and all three to
/// "Claro Controle 25GB". Attachments go through the association service,
/// so each one is logged. Returns the plans that were created.
pub fn seed_catalog<R>(repo: &R) -> ServiceResult<Vec<PlanoWithProdutos>>
where
    R: PlanoReader + PlanoWriter + ProdutoReader + ProdutoWriter + PlanoProdutoWriter + ?Sized,
{
    if !planos::list_planos(repo)?.is_empty() {
        log::info!("Catalog already has planos, skipping seed");
        return Ok(Vec::new());
    }

    let mut produto_ids = Vec::with_capacity(PRODUTOS.len());
    for (nome, descricao) in PRODUTOS {
        let produto = produtos::create_produto(
            repo,
            AddProdutoForm {
                nome: Some(nome.to_string()),
                descricao: Some(descricao.to_string()),
            },
        )?;
        produto_ids.push(produto.id);
    }

    let Some((&first, rest)) = produto_ids.split_first() else {
        return Ok(Vec::new());
    };

    let pos = planos::create_plano(repo, plano_form(PLANO_POS, first))?;

    let mut controle = planos::create_plano(repo, plano_form(PLANO_CONTROLE, first))?;
    for &produto_id in rest {
        controle = associations::attach_produto(repo, controle.plano.id, produto_id)?;
    }

    let seeded = vec![pos, controle];
    log::info!(
        "Seeded {} planos and {} produtos",
        seeded.len(),
        produto_ids.len()
    );

    Ok(seeded)
}

fn plano_form((nome, descricao): (&str, &str), produto_id: i32) -> AddPlanoForm {
    AddPlanoForm {
        nome: Some(nome.to_string()),
        descricao: Some(descricao.to_string()),
        produto_id: Some(produto_id.into()),
    }
}
