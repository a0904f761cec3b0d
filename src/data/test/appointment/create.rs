use super::*;
use chrono::{Duration, Utc};

/// Tests booking an appointment.
///
/// Expected: Ok with the row inserted as "Pendiente" regardless of input
#[tokio::test]
async fn creates_pending_appointment() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let servicio = factory::create_servicio(db).await?;
    let veterinario = factory::create_veterinario(db).await?;

    let repo = AppointmentRepository::new(db);
    let cita = repo
        .create(CreateAppointmentDto {
            id_mascota: mascota.id,
            id_cliente: cliente.n_documento.clone(),
            id_servicio: servicio.id,
            id_veterinario: veterinario.id,
            fecha: Utc::now() + Duration::days(3),
            descripcion: Some("Control anual".to_string()),
        })
        .await?;

    assert_eq!(cita.estado, CITA_PENDIENTE);
    assert_eq!(cita.id_mascota, mascota.id);
    assert_eq!(cita.descripcion, "Control anual");

    Ok(())
}
