use super::*;

/// Tests listing one pet's appointments.
///
/// Expected: only that pet's rows, each with its service
#[tokio::test]
async fn scopes_listing_to_one_pet() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let otra = factory::create_mascota(db, &cliente.n_documento).await?;
    let cita = factory::create_cita(db, mascota.id, &cliente.n_documento).await?;
    factory::create_cita(db, otra.id, &cliente.n_documento).await?;

    let repo = AppointmentRepository::new(db);
    let listado = repo.list_by_mascota(mascota.id).await?;

    assert_eq!(listado.len(), 1);
    let (row, servicio) = &listado[0];
    assert_eq!(row.id, cita.id);
    assert!(servicio.is_some());

    Ok(())
}
