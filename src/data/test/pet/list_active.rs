use super::*;
use test_utils::factory::mascota::MascotaFactory;

/// Tests that suspended pets stay out of the listing and that labels come
/// back resolved.
///
/// Expected: only the active pet, with species, breed and owner names
#[tokio::test]
async fn excludes_suspended_pets() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;
    let activa = factory::create_mascota(db, &cliente.n_documento).await?;
    MascotaFactory::new(db, &cliente.n_documento)
        .estado("Suspendido")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let listado = repo.list_active().await?;

    assert_eq!(listado.len(), 1);
    let item = &listado[0];
    assert_eq!(item.mascota.id, activa.id);
    assert!(item.especie.is_some());
    assert!(item.raza.is_some());
    assert_eq!(item.cliente.as_deref(), Some(cliente.nombre.as_str()));

    Ok(())
}

/// Tests scoping the listing to a single client.
///
/// Expected: only pets owned by the requested client
#[tokio::test]
async fn scopes_listing_to_one_client() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let duenia = factory::create_cliente(db).await?;
    let otra = factory::create_cliente(db).await?;
    let mascota = factory::create_mascota(db, &duenia.n_documento).await?;
    factory::create_mascota(db, &otra.n_documento).await?;

    let repo = PetRepository::new(db);
    let listado = repo.list_active_by_cliente(&duenia.n_documento).await?;

    assert_eq!(listado.len(), 1);
    assert_eq!(listado[0].mascota.id, mascota.id);

    Ok(())
}
