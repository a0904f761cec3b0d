use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::cita::CitaFactory;

/// Tests the dashboard listing across clients and states.
///
/// Expected: every row present whatever its state, soonest first, with
/// the pet and service labels resolved
#[tokio::test]
async fn includes_every_state_soonest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let (otro, otra_mascota) = create_cliente_with_mascota(db).await?;

    let cercana = CitaFactory::new(db, mascota.id, &cliente.n_documento)
        .fecha(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let lejana = CitaFactory::new(db, otra_mascota.id, &otro.n_documento)
        .fecha(Utc::now() + Duration::days(3))
        .estado(CITA_CANCELADO)
        .build()
        .await?;

    let listado = AppointmentRepository::new(db).list_dashboard().await?;

    assert_eq!(listado.len(), 2);
    assert_eq!(listado[0].cita.id, cercana.id);
    assert_eq!(listado[1].cita.id, lejana.id);
    assert!(listado[0].mascota.is_some());
    assert!(listado[0].servicio.is_some());

    Ok(())
}
