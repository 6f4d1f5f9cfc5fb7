use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateEmployeeInput, Employee, UpdateEmployeeInput};
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Employee resource service independent of the web framework.
///
/// Every operation is a single read-then-write round trip against the
/// repository; no state is held between requests.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ServiceError> {
    match value.as_deref() {
        Some(v) => Ok(v),
        None => Err(ServiceError::Validation(format!("{} is required", field))),
    }
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List every employee in storage-default order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        self.repo.list().await
    }

    /// Fetch one employee by id.
    pub async fn get(&self, id: Uuid) -> Result<Employee, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("employee"))
    }

    /// Create an employee with a freshly assigned id.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateEmployeeInput) -> Result<Employee, ServiceError> {
        let name = required(&input.name, "name")?;
        let email = required(&input.email, "email")?;
        models::employee::validate_name(name)?;
        models::employee::validate_email(email)?;

        let created = self.repo.insert(name, email, input.phone.as_deref(), input.salary).await?;
        info!(id = %created.id, name = %created.name, "employee_created");
        Ok(created)
    }

    /// Overwrite all mutable fields of an existing employee.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateEmployeeInput) -> Result<Employee, ServiceError> {
        let name = required(&input.name, "name")?;
        let email = required(&input.email, "email")?;
        models::employee::validate_name(name)?;
        models::employee::validate_email(email)?;

        let updated = self
            .repo
            .update(id, name, email, input.phone.as_deref(), input.salary)
            .await?
            .ok_or_else(|| ServiceError::not_found("employee"))?;
        info!(id = %updated.id, "employee_updated");
        Ok(updated)
    }

    /// Remove an employee permanently.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("employee"));
        }
        info!(id = %id, "employee_deleted");
        Ok(())
    }
}
