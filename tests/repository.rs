use diesel::RunQueryDsl;

use planos_api::domain::plano::{NewPlano, UpdatePlano};
use planos_api::domain::plano_produto_log::{LogAction, LogListQuery};
use planos_api::domain::produto::{NewProduto, UpdateProduto};
use planos_api::repository::{
    PlanoProdutoLogReader, PlanoProdutoWriter, PlanoReader, PlanoWriter, ProdutoReader,
    ProdutoWriter, RepositoryError,
};

mod common;

#[test]
fn test_produto_repository_crud() {
    let test_db = common::TestDb::new("test_produto_repository_crud.db");
    let repo = test_db.repository();

    let internet = repo
        .create_produto(&NewProduto::new("Internet").with_descricao("25GB de internet"))
        .unwrap();
    let whatsapp = repo
        .create_produto(&NewProduto::new("WhatsApp Ilimitado"))
        .unwrap();
    assert!(internet.id < whatsapp.id);

    let listed = repo.list_produtos().unwrap();
    let names: Vec<&str> = listed.iter().map(|produto| produto.nome.as_str()).collect();
    assert_eq!(names, vec!["Internet", "WhatsApp Ilimitado"]);

    let updated = repo
        .update_produto(
            internet.id,
            &UpdateProduto {
                nome: "Internet 30GB".to_string(),
                descricao: None,
                updated_at: internet.updated_at,
            },
        )
        .unwrap();
    assert_eq!(updated.nome, "Internet 30GB");
    assert_eq!(updated.descricao, None);

    let err = repo
        .update_produto(
            9_999,
            &UpdateProduto {
                nome: "Fantasma".to_string(),
                descricao: None,
                updated_at: internet.updated_at,
            },
        )
        .expect_err("expected update of a missing produto to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let deleted = repo.delete_produto(whatsapp.id).unwrap();
    assert_eq!(deleted.nome, "WhatsApp Ilimitado");
    assert!(repo.get_produto_by_id(whatsapp.id).unwrap().is_none());

    let err = repo
        .delete_produto(whatsapp.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_plano_repository_crud() {
    let test_db = common::TestDb::new("test_plano_repository_crud.db");
    let repo = test_db.repository();

    let produto = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let created = repo
        .create_plano(
            &NewPlano::new("Claro Pós 50GB").with_descricao("Plano pós-pago"),
            produto.id,
        )
        .unwrap();

    assert_eq!(created.plano.nome, "Claro Pós 50GB");
    assert_eq!(created.produtos, vec![produto.clone()]);
    assert_eq!(created.logs.len(), 1);
    assert_eq!(created.logs[0].action, LogAction::Adicionado);

    let fetched = repo.get_plano_by_id(created.plano.id).unwrap();
    assert_eq!(fetched, Some(created.plano.clone()));

    let updated = repo
        .update_plano(
            created.plano.id,
            &UpdatePlano {
                nome: "Claro Pós 60GB".to_string(),
                descricao: None,
                updated_at: created.plano.updated_at,
            },
        )
        .unwrap();
    assert_eq!(updated.nome, "Claro Pós 60GB");
    assert_eq!(updated.descricao, None);

    let deleted = repo.delete_plano(created.plano.id).unwrap();
    assert_eq!(deleted.id, created.plano.id);
    assert!(repo.list_planos().unwrap().is_empty());
    assert!(matches!(
        repo.delete_plano(created.plano.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_create_plano_with_unknown_produto_rolls_back() {
    let test_db = common::TestDb::new("test_create_plano_rolls_back.db");
    let repo = test_db.repository();

    let result = repo.create_plano(&NewPlano::new("Claro Controle 25GB"), 404);

    assert!(matches!(result, Err(RepositoryError::MissingReference(_))));
    assert!(repo.list_planos().unwrap().is_empty());
    let (total, _) = repo.list_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_create_plano_checks_produto_inside_transaction() {
    let test_db = common::TestDb::new("test_create_plano_checks_produto.db");
    let repo = test_db.repository();

    let produto = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    repo.delete_produto(produto.id).unwrap();

    let result = repo.create_plano(&NewPlano::new("Claro Pós 50GB"), produto.id);

    assert!(matches!(result, Err(RepositoryError::MissingReference(_))));
    assert!(repo.list_planos().unwrap().is_empty());
}

/// Make every insert into the log table fail.
fn reject_log_writes(test_db: &common::TestDb) {
    let mut conn = test_db.pool().get().expect("expected a pooled connection");
    diesel::sql_query(
        "CREATE TRIGGER reject_log_writes BEFORE INSERT ON plano_produto_logs \
         BEGIN SELECT RAISE(ABORT, 'log writes disabled'); END;",
    )
    .execute(&mut conn)
    .expect("expected trigger to be created");
}

#[test]
fn test_attach_rolls_back_when_log_insert_fails() {
    let test_db = common::TestDb::new("test_attach_rolls_back.db");
    let repo = test_db.repository();

    let internet = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let whatsapp = repo
        .create_produto(&NewProduto::new("WhatsApp Ilimitado"))
        .unwrap();
    let plano = repo
        .create_plano(&NewPlano::new("Claro Controle 25GB"), internet.id)
        .unwrap()
        .plano;

    reject_log_writes(&test_db);

    let result = repo.attach_produto(plano.id, whatsapp.id);
    assert!(result.is_err());

    let aggregate = repo.get_plano_with_produtos(plano.id).unwrap().unwrap();
    assert_eq!(aggregate.produtos, vec![internet]);
    assert_eq!(aggregate.logs.len(), 1);
}

#[test]
fn test_detach_rolls_back_when_log_insert_fails() {
    let test_db = common::TestDb::new("test_detach_rolls_back.db");
    let repo = test_db.repository();

    let internet = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let plano = repo
        .create_plano(&NewPlano::new("Claro Pós 50GB"), internet.id)
        .unwrap()
        .plano;

    reject_log_writes(&test_db);

    let result = repo.detach_produto(plano.id, internet.id);
    assert!(result.is_err());

    let aggregate = repo.get_plano_with_produtos(plano.id).unwrap().unwrap();
    assert!(aggregate.contains_produto(internet.id));
    assert_eq!(aggregate.logs.len(), 1);
}

#[test]
fn test_create_plano_rolls_back_when_log_insert_fails() {
    let test_db = common::TestDb::new("test_create_plano_log_failure.db");
    let repo = test_db.repository();

    let internet = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    reject_log_writes(&test_db);

    let result = repo.create_plano(&NewPlano::new("Claro Pós 50GB"), internet.id);

    assert!(result.is_err());
    assert!(repo.list_planos().unwrap().is_empty());
}

#[test]
fn test_attach_and_detach_keep_log_in_step() {
    let test_db = common::TestDb::new("test_attach_and_detach.db");
    let repo = test_db.repository();

    let internet = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let whatsapp = repo
        .create_produto(&NewProduto::new("WhatsApp Ilimitado"))
        .unwrap();
    let plano = repo
        .create_plano(&NewPlano::new("Claro Controle 25GB"), internet.id)
        .unwrap()
        .plano;

    let log = repo.attach_produto(plano.id, whatsapp.id).unwrap();
    assert_eq!(log.action, LogAction::Adicionado);
    assert_eq!(log.produto_id, whatsapp.id);

    let err = repo
        .attach_produto(plano.id, whatsapp.id)
        .expect_err("expected duplicate attach to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let aggregate = repo.get_plano_with_produtos(plano.id).unwrap().unwrap();
    assert_eq!(aggregate.produtos.len(), 2);
    assert_eq!(aggregate.logs.len(), 2);

    let removed = repo.detach_produto(plano.id, whatsapp.id).unwrap();
    assert_eq!(removed.map(|log| log.action), Some(LogAction::Removido));

    let repeated = repo.detach_produto(plano.id, whatsapp.id).unwrap();
    assert!(repeated.is_none());

    let aggregate = repo.get_plano_with_produtos(plano.id).unwrap().unwrap();
    assert!(!aggregate.contains_produto(whatsapp.id));
    let actions: Vec<LogAction> = aggregate.logs.iter().map(|log| log.action).collect();
    assert_eq!(
        actions,
        vec![
            LogAction::Adicionado,
            LogAction::Adicionado,
            LogAction::Removido
        ]
    );
}

#[test]
fn test_deletes_cascade_to_join_rows_and_logs() {
    let test_db = common::TestDb::new("test_deletes_cascade.db");
    let repo = test_db.repository();

    let internet = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let whatsapp = repo
        .create_produto(&NewProduto::new("WhatsApp Ilimitado"))
        .unwrap();
    let pos = repo
        .create_plano(&NewPlano::new("Claro Pós 50GB"), internet.id)
        .unwrap()
        .plano;
    let controle = repo
        .create_plano(&NewPlano::new("Claro Controle 25GB"), internet.id)
        .unwrap()
        .plano;
    repo.attach_produto(controle.id, whatsapp.id).unwrap();

    let (total, _) = repo.list_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 3);

    repo.delete_plano(pos.id).unwrap();
    let (total, entries) = repo.list_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert!(entries.iter().all(|entry| entry.plano_id == controle.id));

    repo.delete_produto(internet.id).unwrap();
    let (total, entries) = repo.list_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(entries[0].produto_id, whatsapp.id);

    let aggregate = repo.get_plano_with_produtos(controle.id).unwrap().unwrap();
    assert_eq!(aggregate.produtos, vec![whatsapp]);
}

#[test]
fn test_list_logs_paginates_oldest_first() {
    let test_db = common::TestDb::new("test_list_logs_paginates.db");
    let repo = test_db.repository();

    let produto = repo.create_produto(&NewProduto::new("Internet")).unwrap();
    let outro = repo
        .create_produto(&NewProduto::new("WhatsApp Ilimitado"))
        .unwrap();
    let plano = repo
        .create_plano(&NewPlano::new("Claro Pós 50GB"), produto.id)
        .unwrap()
        .plano;

    // One log from creation, then eleven alternating attach/detach events.
    for step in 0..11 {
        if step % 2 == 0 {
            repo.attach_produto(plano.id, outro.id).unwrap();
        } else {
            repo.detach_produto(plano.id, outro.id).unwrap();
        }
    }

    let mut sizes = Vec::new();
    let mut seen = Vec::new();
    for page in 1..=3 {
        let (total, entries) = repo
            .list_logs(LogListQuery::new().paginate(page, 5))
            .unwrap();
        assert_eq!(total, 12);
        sizes.push(entries.len());
        seen.extend(entries);
    }

    assert_eq!(sizes, vec![5, 5, 2]);
    assert_eq!(seen[0].produto_id, produto.id);
    assert_eq!(seen[0].nome, "Internet");
    assert_eq!(seen[1].action, LogAction::Adicionado);
    assert_eq!(seen[2].action, LogAction::Removido);
    assert_eq!(seen[11].action, LogAction::Adicionado);
    assert_eq!(seen[11].nome, "WhatsApp Ilimitado");
}
