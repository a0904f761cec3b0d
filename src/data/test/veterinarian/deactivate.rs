use super::*;

/// Tests deactivating a profile.
///
/// Expected: the row survives with activo false and stays fetchable by id
#[tokio::test]
async fn keeps_the_row_with_activo_false() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let veterinario = factory::create_veterinario(db).await?;

    let repo = VeterinarianRepository::new(db);
    let desactivado = repo.deactivate(veterinario.id).await?.unwrap();
    assert!(!desactivado.activo);

    let recuperado = repo.get(veterinario.id).await?.unwrap();
    assert_eq!(recuperado.nombre_completo, veterinario.nombre_completo);
    assert!(!recuperado.activo);

    Ok(())
}

/// Tests deactivating an id that does not exist.
///
/// Expected: None, nothing inserted
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let result = VeterinarianRepository::new(db).deactivate(999).await?;
    assert!(result.is_none());

    Ok(())
}
