use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::domain::Employee;
use crate::errors::ServiceError;

/// Repository abstraction for employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError>;
    async fn insert(&self, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Employee, ServiceError>;
    /// Overwrites all mutable fields; returns `None` when `id` is unknown.
    async fn update(&self, id: Uuid, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Option<Employee>, ServiceError>;
    /// Returns `true` when a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockEmployeeRepository {
        rows: Mutex<HashMap<Uuid, Employee>>,
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepository {
        async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().cloned().collect())
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn insert(&self, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Employee, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let employee = Employee {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.map(|p| p.to_string()),
                salary,
            };
            rows.insert(employee.id, employee.clone());
            Ok(employee)
        }

        async fn update(&self, id: Uuid, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Option<Employee>, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(row) => {
                    row.name = name.to_string();
                    row.email = email.to_string();
                    row.phone = phone.map(|p| p.to_string());
                    row.salary = salary;
                    Ok(Some(row.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.remove(&id).is_some())
        }
    }
}
