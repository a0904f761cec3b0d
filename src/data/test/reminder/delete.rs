use super::*;

/// Tests the hard delete and its row count for missing ids.
///
/// Expected: 1 row affected for an existing reminder, 0 afterwards
#[tokio::test]
async fn reports_affected_rows() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let (cliente, mascota) = create_cliente_with_mascota(db).await?;
    let recordatorio = factory::create_recordatorio(db, &cliente.n_documento, mascota.id).await?;

    let repo = ReminderRepository::new(db);
    assert_eq!(repo.delete(recordatorio.id).await?, 1);
    assert_eq!(repo.delete(recordatorio.id).await?, 0);

    Ok(())
}
