use super::*;

/// Tests the hard delete and its row count for missing ids.
///
/// Expected: 1 row affected for an existing species, 0 for a missing one
#[tokio::test]
async fn reports_affected_rows() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let especie = factory::create_especie(db).await?;

    let repo = SpeciesRepository::new(db);
    assert_eq!(repo.delete(especie.id).await?, 1);
    assert_eq!(repo.delete(especie.id).await?, 0);

    Ok(())
}
