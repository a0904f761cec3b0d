//! AnimalBeats test utils
//!
//! Shared testing utilities for the clinic backend. Provides a builder for
//! test contexts backed by an in-memory SQLite database plus factories that
//! insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_pets() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let owner = factory::usuario::create_cliente(db).await?;
//!     let pet = factory::mascota::create_mascota(db, &owner.n_documento).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
