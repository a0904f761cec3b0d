use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub rol: String,
}

impl From<entity::rol::Model> for RoleDto {
    fn from(model: entity::rol::Model) -> Self {
        Self {
            id: model.id,
            rol: model.rol,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RoleListDto {
    pub roles: Vec<RoleDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateRoleDto {
    pub rol: Option<String>,
}

/// This endpoint alone answers with an English `message` key; clients
/// already depend on it.
#[derive(Serialize, ToSchema)]
pub struct CreateRoleResponseDto {
    pub message: String,
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_keeps_the_english_message_key() {
        let value = serde_json::to_value(CreateRoleResponseDto {
            message: "Rol creado".to_string(),
            id: 4,
        })
        .unwrap();

        assert!(value.get("message").is_some());
        assert!(value.get("mensaje").is_none());
    }
}
