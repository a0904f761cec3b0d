use super::*;

/// Tests the soft delete. The row must survive with a flipped status.
///
/// Expected: Ok(Some) with estado "Suspendido" and the row still readable
#[tokio::test]
async fn suspends_without_deleting() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;

    let repo = UserRepository::new(db);
    let suspended = repo
        .set_estado(&cliente.n_documento, ESTADO_SUSPENDIDO)
        .await?
        .unwrap();
    assert_eq!(suspended.estado, ESTADO_SUSPENDIDO);

    let still_there = repo.get_by_documento(&cliente.n_documento).await?;
    assert!(still_there.is_some());

    Ok(())
}

/// Tests reactivating a suspended account.
///
/// Expected: estado back to "Activo"
#[tokio::test]
async fn reactivates_account() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;

    let repo = UserRepository::new(db);
    repo.set_estado(&cliente.n_documento, ESTADO_SUSPENDIDO)
        .await?;
    let reactivated = repo
        .set_estado(&cliente.n_documento, ESTADO_ACTIVO)
        .await?
        .unwrap();

    assert_eq!(reactivated.estado, ESTADO_ACTIVO);

    Ok(())
}
