//! Axum route configuration and API documentation.
//!
//! Route casing is part of the published API contract, so some resources
//! mix capitalized and lowercase path segments. Swagger UI is served at
//! `/documentacion-api-animalbeats` and uploaded images under `/uploads`.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        self, appointment, auth, breed, catalog, dashboard, disease, pet, reminder, role, species,
        user, veterinarian,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AnimalBeats API",
        description = "Backend de gestión para la clínica veterinaria AnimalBeats"
    ),
    paths(
        controller::health,
        auth::register,
        auth::login,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::suspend_user,
        user::reactivate_user,
        user::mark_user_pending,
        role::list_roles,
        role::create_role,
        role::delete_role,
        catalog::list_document_types,
        catalog::list_services,
        species::list_species,
        species::get_species,
        species::create_species,
        species::update_species,
        species::delete_species,
        breed::list_breeds,
        breed::get_breed,
        breed::create_breed,
        breed::update_breed,
        breed::delete_breed,
        pet::list_pets,
        pet::get_pet,
        pet::create_pet,
        pet::update_pet,
        pet::delete_pet,
        veterinarian::create_veterinarian,
        veterinarian::list_veterinarians,
        veterinarian::get_veterinarian,
        veterinarian::delete_veterinarian,
        appointment::list_appointments,
        appointment::get_appointment,
        appointment::list_pet_appointments,
        appointment::create_appointment,
        appointment::update_appointment,
        appointment::confirm_appointment,
        appointment::cancel_appointment,
        appointment::mark_appointment_pending,
        reminder::list_reminders,
        reminder::list_pet_reminders,
        reminder::first_pet_for_reminder,
        reminder::create_reminder,
        reminder::update_reminder,
        reminder::delete_reminder,
        disease::list_diseases,
        disease::create_disease,
        disease::update_disease,
        disease::delete_disease,
        dashboard::admin_dashboard,
        dashboard::client_dashboard,
        dashboard::veterinarian_dashboard,
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router(upload_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/health", get(controller::health))
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))
        .route("/usuario/Listado", get(user::list_users))
        .route("/usuario/{n_documento}", get(user::get_user))
        .route("/usuario/Crear", post(user::create_user))
        .route("/usuario/Actualizar/{n_documento}", put(user::update_user))
        .route("/usuario/Suspender/{n_documento}", put(user::suspend_user))
        .route(
            "/usuario/Reactivar/{n_documento}",
            put(user::reactivate_user),
        )
        .route(
            "/usuario/Pendiente/{n_documento}",
            put(user::mark_user_pending),
        )
        .route("/tiposDocumento", get(catalog::list_document_types))
        .route("/roles/Listado", get(role::list_roles))
        .route("/roles/Crear", post(role::create_role))
        .route("/roles/Eliminar/{id}", delete(role::delete_role))
        .route("/servicios/Listado", get(catalog::list_services))
        .route("/Especies/Listado", get(species::list_species))
        .route("/Especies/{id}", get(species::get_species))
        .route("/Especies/Crear", post(species::create_species))
        .route("/Especies/Actualizar/{id}", put(species::update_species))
        .route("/Especies/Eliminar/{id}", delete(species::delete_species))
        .route("/Razas/Listado/{id_especie}", get(breed::list_breeds))
        .route("/Razas/{id}", get(breed::get_breed))
        .route("/Razas/Crear/{id_especie}", post(breed::create_breed))
        .route("/Razas/Actualizar/{id}", put(breed::update_breed))
        .route("/Razas/Eliminar/{id}", delete(breed::delete_breed))
        .route(
            "/veterinarios/crear",
            post(veterinarian::create_veterinarian),
        )
        .route("/veterinarios", get(veterinarian::list_veterinarians))
        .route(
            "/veterinarios/{id}",
            get(veterinarian::get_veterinarian).delete(veterinarian::delete_veterinarian),
        )
        .route("/mascotas", get(pet::list_pets))
        .route("/Mascotas/{id}", get(pet::get_pet))
        .route("/Mascotas/Registro", post(pet::create_pet))
        .route("/Mascotas/Actualizar/{id}", put(pet::update_pet))
        .route("/Mascotas/Eliminar/{id}", put(pet::delete_pet))
        .route("/Citas/Listado", get(appointment::list_appointments))
        .route("/Citas/{id}", get(appointment::get_appointment))
        .route(
            "/Citas/mascota/{id}",
            get(appointment::list_pet_appointments),
        )
        .route("/Citas/Registrar", post(appointment::create_appointment))
        .route(
            "/Citas/Actualizar/{id}",
            put(appointment::update_appointment),
        )
        .route(
            "/Citas/Confirmar/{id}",
            put(appointment::confirm_appointment),
        )
        .route("/Citas/Cancelar/{id}", put(appointment::cancel_appointment))
        .route(
            "/Citas/Pendiente/{id}",
            put(appointment::mark_appointment_pending),
        )
        .route("/recordatorios", get(reminder::list_reminders))
        .route(
            "/recordatorio/mascota/{id}",
            get(reminder::list_pet_reminders),
        )
        .route(
            "/Mascota/recordatorio/{id}",
            get(reminder::first_pet_for_reminder),
        )
        .route("/recordatorios/guardar", post(reminder::create_reminder))
        .route(
            "/recordatorios/modificar/{id}",
            put(reminder::update_reminder),
        )
        .route(
            "/recordatorios/eliminar/{id}",
            delete(reminder::delete_reminder),
        )
        .route("/Enfermedades/Listado", get(disease::list_diseases))
        .route("/Enfermedades/Registrar", post(disease::create_disease))
        .route(
            "/Enfermedades/Actualizar/{id}",
            put(disease::update_disease),
        )
        .route(
            "/Enfermedades/Eliminar/{id}",
            delete(disease::delete_disease),
        )
        .route("/admin/dashboard", get(dashboard::admin_dashboard))
        .route(
            "/cliente/dashboard/{n_documento}",
            get(dashboard::client_dashboard),
        )
        .route(
            "/veterinario/dashboard/{n_documento}",
            get(dashboard::veterinarian_dashboard),
        )
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .merge(
            SwaggerUi::new("/documentacion-api-animalbeats")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
}
