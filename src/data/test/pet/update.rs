use super::*;

/// Tests renaming a pet and changing its status.
///
/// Expected: Ok(Some) with both fields persisted
#[tokio::test]
async fn updates_name_and_status() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;
    let mascota = factory::create_mascota(db, &cliente.n_documento).await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .update(mascota.id, "Firulais".to_string(), "Pendiente".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.nombre, "Firulais");
    assert_eq!(updated.estado, "Pendiente");

    Ok(())
}
