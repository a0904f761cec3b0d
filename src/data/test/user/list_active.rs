use super::*;
use test_utils::factory::usuario::UsuarioFactory;

/// Tests that suspended users stay out of the listing.
///
/// Expected: only the active user, carrying its document type label
#[tokio::test]
async fn excludes_suspended_users() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let activo = factory::create_cliente(db).await?;
    UsuarioFactory::new(db)
        .estado(ESTADO_SUSPENDIDO)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let listado = repo.list_active().await?;

    assert_eq!(listado.len(), 1);
    let item = &listado[0];
    assert_eq!(item.usuario.n_documento, activo.n_documento);
    assert!(item.documento.is_some());

    Ok(())
}
