use super::*;

/// Tests the listing with the pet name resolved.
///
/// Expected: every reminder carries its pet's name
#[tokio::test]
async fn resolves_pet_names() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    factory::create_recordatorio(db, &cliente.n_documento, mascota.id).await?;

    let repo = ReminderRepository::new(db);
    let listado = repo.list_with_pet().await?;

    assert_eq!(listado.len(), 1);
    assert_eq!(
        listado[0].mascota.as_deref(),
        Some(mascota.nombre.as_str())
    );

    Ok(())
}

/// Tests scoping reminders to one pet.
///
/// Expected: only the requested pet's reminders
#[tokio::test]
async fn scopes_listing_to_one_pet() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let otra = factory::create_mascota(db, &cliente.n_documento).await?;
    let esperado = factory::create_recordatorio(db, &cliente.n_documento, mascota.id).await?;
    factory::create_recordatorio(db, &cliente.n_documento, otra.id).await?;

    let repo = ReminderRepository::new(db);
    let listado = repo.list_by_mascota(mascota.id).await?;

    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].id, esperado.id);

    Ok(())
}
