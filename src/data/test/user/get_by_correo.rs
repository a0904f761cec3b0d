use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some) for an existing email, matching on the exact address
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.get_by_correo(&cliente.correoelectronico).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().n_documento, cliente.n_documento);

    Ok(())
}

/// Tests looking up an email no account uses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    let found = repo.get_by_correo("nadie@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
