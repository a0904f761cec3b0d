use super::*;

/// Tests moving an appointment through its states.
///
/// Expected: estado persisted after each transition
#[tokio::test]
async fn persists_state_changes() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let cita = factory::create_cita(db, mascota.id, &cliente.n_documento).await?;

    let repo = AppointmentRepository::new(db);
    let confirmada = repo.set_estado(cita, CITA_CONFIRMADO).await?;
    assert_eq!(confirmada.estado, CITA_CONFIRMADO);

    let cancelada = repo.set_estado(confirmada, CITA_CANCELADO).await?;
    assert_eq!(cancelada.estado, CITA_CANCELADO);

    let stored = repo.get(cancelada.id).await?.unwrap();
    assert_eq!(stored.estado, CITA_CANCELADO);

    Ok(())
}
