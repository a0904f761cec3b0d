use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::cita::CitaFactory;

/// Tests the full listing with every display label resolved.
///
/// Expected: one row carrying pet, client, service and vet names
#[tokio::test]
async fn resolves_all_labels() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    factory::create_cita(db, mascota.id, &cliente.n_documento).await?;

    let repo = AppointmentRepository::new(db);
    let listado = repo.list_with_labels().await?;

    assert_eq!(listado.len(), 1);
    let item = &listado[0];
    assert_eq!(item.mascota.as_deref(), Some(mascota.nombre.as_str()));
    assert_eq!(item.cliente.as_deref(), Some(cliente.nombre.as_str()));
    assert!(item.servicio.is_some());
    assert!(item.veterinario.is_some());

    Ok(())
}

/// Tests the sort order of the full listing.
///
/// Expected: the appointment with the later date comes first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;

    let temprana = CitaFactory::new(db, mascota.id, &cliente.n_documento)
        .fecha(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let tardia = CitaFactory::new(db, mascota.id, &cliente.n_documento)
        .fecha(Utc::now() + Duration::days(5))
        .build()
        .await?;

    let listado = AppointmentRepository::new(db).list_with_labels().await?;

    assert_eq!(listado.len(), 2);
    assert_eq!(listado[0].cita.id, tardia.id);
    assert_eq!(listado[1].cita.id, temprana.id);

    Ok(())
}
