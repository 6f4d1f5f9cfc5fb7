use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain employee (business view, no persistence-only columns)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: Decimal,
}

/// Create input. `name` and `email` stay optional at the boundary so a
/// missing field surfaces as a validation error, not a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub salary: Decimal,
}

/// Update input. Same shape as create; the target id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub salary: Decimal,
}

impl From<models::employee::Model> for Employee {
    fn from(m: models::employee::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, phone: m.phone, salary: m.salary }
    }
}
