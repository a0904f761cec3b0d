use super::*;

/// Tests that updating without a new image keeps the stored one.
///
/// Expected: name changed, image untouched
#[tokio::test]
async fn keeps_image_when_none_uploaded() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = SpeciesRepository::new(db);
    let especie = repo
        .create("Gato".to_string(), Some("http://img/gato.png".to_string()))
        .await?;

    let updated = repo
        .update(especie.id, "Felino".to_string(), None)
        .await?
        .unwrap();

    assert_eq!(updated.especie, "Felino");
    assert_eq!(updated.imagen.as_deref(), Some("http://img/gato.png"));

    Ok(())
}

/// Tests updating an id with no species.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_species() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = SpeciesRepository::new(db);
    let updated = repo.update(404, "Nada".to_string(), None).await?;

    assert!(updated.is_none());

    Ok(())
}
