use super::*;

/// Tests creating a user with a pre-hashed password.
///
/// Expected: Ok with the row inserted as "Activo"
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let documento = factory::create_documento(db).await?;
    factory::rol::ensure_rol(db, 2, "cliente").await?;

    let repo = UserRepository::new(db);
    let usuario = repo
        .create(CreateUserParams {
            n_documento: "1001".to_string(),
            nombre: "Laura Gomez".to_string(),
            correoelectronico: "laura@example.com".to_string(),
            contrasena_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            id_documento: documento.id,
            id_rol: 2,
        })
        .await?;

    assert_eq!(usuario.n_documento, "1001");
    assert_eq!(usuario.estado, ESTADO_ACTIVO);
    assert_eq!(usuario.id_rol, 2);

    Ok(())
}

/// Tests that a duplicated email is rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let documento = factory::create_documento(db).await?;
    factory::rol::ensure_rol(db, 2, "cliente").await?;

    let repo = UserRepository::new(db);
    let params = |n_documento: &str| CreateUserParams {
        n_documento: n_documento.to_string(),
        nombre: "Laura Gomez".to_string(),
        correoelectronico: "laura@example.com".to_string(),
        contrasena_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        id_documento: documento.id,
        id_rol: 2,
    };

    repo.create(params("1001")).await?;
    let result = repo.create(params("1002")).await;

    assert!(result.is_err());

    Ok(())
}
