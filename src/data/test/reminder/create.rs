use super::*;
use chrono::{Duration, Utc};

/// Tests saving a reminder.
///
/// Expected: Ok with the row inserted as "Activo"
#[tokio::test]
async fn creates_active_reminder() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;

    let repo = ReminderRepository::new(db);
    let recordatorio = repo
        .create(
            cliente.n_documento.clone(),
            mascota.id,
            Utc::now() + Duration::days(7),
            "Desparasitar".to_string(),
        )
        .await?;

    assert_eq!(recordatorio.id_cliente, cliente.n_documento);
    assert_eq!(recordatorio.id_mascota, mascota.id);
    assert_eq!(recordatorio.estado, "Activo");

    Ok(())
}
