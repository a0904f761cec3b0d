use super::*;

/// Tests the soft delete. The pet must stay readable by id afterwards.
///
/// Expected: Ok(Some) with estado "Suspendido" and get() still succeeding
#[tokio::test]
async fn suspends_without_deleting() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;
    let mascota = factory::create_mascota(db, &cliente.n_documento).await?;

    let repo = PetRepository::new(db);
    let suspended = repo.suspend(mascota.id).await?.unwrap();
    assert_eq!(suspended.estado, "Suspendido");

    let still_there = repo.get(mascota.id).await?;
    assert!(still_there.is_some());

    Ok(())
}

/// Tests suspending an id with no pet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_pet() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = PetRepository::new(db);
    let suspended = repo.suspend(404).await?;

    assert!(suspended.is_none());

    Ok(())
}
