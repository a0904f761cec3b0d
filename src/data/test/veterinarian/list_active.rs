use super::*;

/// Tests that deactivated profiles drop out of the listing.
///
/// Expected: only the active profile remains
#[tokio::test]
async fn excludes_deactivated_profiles() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let activo = factory::create_veterinario(db).await?;
    let retirado = factory::create_veterinario(db).await?;

    let repo = VeterinarianRepository::new(db);
    repo.deactivate(retirado.id).await?;

    let listado = repo.list_active().await?;

    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].id, activo.id);

    Ok(())
}
