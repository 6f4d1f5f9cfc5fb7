use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::employee::domain::Employee;
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = models::employee::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>, ServiceError> {
        let found = models::employee::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Employee::from))
    }

    async fn insert(&self, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Employee, ServiceError> {
        let created = models::employee::create(&self.db, name, email, phone, salary).await?;
        Ok(Employee::from(created))
    }

    async fn update(&self, id: Uuid, name: &str, email: &str, phone: Option<&str>, salary: Decimal) -> Result<Option<Employee>, ServiceError> {
        let current = models::employee::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None); };

        let mut am: models::employee::ActiveModel = existing.into();
        am.name = Set(name.to_string());
        am.email = Set(email.to_string());
        am.phone = Set(phone.map(|p| p.to_string()));
        am.salary = Set(salary);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(Employee::from(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = models::employee::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EmployeeService;
    use crate::employee::domain::CreateEmployeeInput;
    use crate::test_support::get_db;
    use std::sync::Arc;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(db)));

        let created = svc
            .create(CreateEmployeeInput {
                name: Some("Repo Roundtrip".into()),
                email: Some("repo@example.com".into()),
                phone: None,
                salary: Decimal::from(1000),
            })
            .await?;

        let fetched = svc.get(created.id).await?;
        assert_eq!(fetched, created);

        svc.delete(created.id).await?;
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
