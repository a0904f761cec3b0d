use super::*;
use chrono::NaiveDate;

/// Tests registering a pet for an existing client.
///
/// Expected: Ok with the stored row pointing at the owner
#[tokio::test]
async fn creates_pet_for_client() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let cliente = factory::create_cliente(db).await?;
    let especie = factory::create_especie(db).await?;
    let raza = factory::create_raza(db, especie.id).await?;

    let repo = PetRepository::new(db);
    let mascota = repo
        .create(CreatePetDto {
            nombre: "Rocky".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
            estado: "Activo".to_string(),
            id_cliente: cliente.n_documento.clone(),
            id_especie: especie.id,
            id_raza: raza.id,
        })
        .await?;

    assert_eq!(mascota.nombre, "Rocky");
    assert_eq!(mascota.id_cliente, cliente.n_documento);
    assert_eq!(mascota.estado, "Activo");

    Ok(())
}
