use super::*;

/// Tests updating the editable profile fields.
///
/// Expected: Ok(Some) with the new values persisted
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;
    factory::rol::ensure_rol(db, 3, "veterinario").await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            &cliente.n_documento,
            "Nuevo Nombre".to_string(),
            "nuevo@example.com".to_string(),
            cliente.id_documento,
            3,
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.nombre, "Nuevo Nombre");
    assert_eq!(updated.correoelectronico, "nuevo@example.com");
    assert_eq!(updated.id_rol, 3);

    Ok(())
}

/// Tests updating a document number with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update("9999", "Nadie".to_string(), "nadie@example.com".to_string(), 1, 2)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
