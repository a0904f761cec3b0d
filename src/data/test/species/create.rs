use super::*;

/// Tests creating a species with an uploaded image URL.
///
/// Expected: Ok with both fields stored
#[tokio::test]
async fn creates_species_with_image() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let repo = SpeciesRepository::new(db);
    let especie = repo
        .create(
            "Perro".to_string(),
            Some("http://localhost:3000/uploads/especies/1_perro.png".to_string()),
        )
        .await?;

    assert_eq!(especie.especie, "Perro");
    assert!(especie.imagen.is_some());

    Ok(())
}
