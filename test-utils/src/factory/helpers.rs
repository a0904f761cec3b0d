//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client user together with one of their pets.
///
/// Convenience for appointment and reminder tests, which almost always need
/// this pair.
pub async fn create_cliente_with_mascota(
    db: &DatabaseConnection,
) -> Result<(entity::usuario::Model, entity::mascota::Model), DbErr> {
    let cliente = crate::factory::usuario::create_cliente(db).await?;
    let mascota = crate::factory::mascota::create_mascota(db, &cliente.n_documento).await?;

    Ok((cliente, mascota))
}
