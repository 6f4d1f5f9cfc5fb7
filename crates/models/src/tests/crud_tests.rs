use crate::db::connect;
use crate::employee;
use anyhow::Result;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_employee_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    // Create
    let created = employee::create(&db, "Test Employee", "test@example.com", Some("555-0000"), Decimal::new(4200050, 2)).await?;
    assert_eq!(created.name, "Test Employee");
    assert_eq!(created.email, "test@example.com");
    assert_eq!(created.phone.as_deref(), Some("555-0000"));
    assert_eq!(created.salary, Decimal::new(4200050, 2));

    // Read
    let found = employee::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("created employee should be readable");
    assert_eq!(found, created);

    // Update
    let mut am: employee::ActiveModel = found.into();
    am.name = Set("Renamed Employee".to_string());
    am.phone = Set(None);
    let updated = am.update(&db).await?;
    assert_eq!(updated.name, "Renamed Employee");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.id, created.id);

    // Delete
    let res = employee::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let after = employee::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

#[tokio::test]
async fn test_employee_create_rejects_blank_fields() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    let err = employee::create(&db, "  ", "x@example.com", None, Decimal::ZERO).await;
    assert!(matches!(err, Err(crate::errors::ModelError::Validation(_))));

    let err = employee::create(&db, "Named", "", None, Decimal::ZERO).await;
    assert!(matches!(err, Err(crate::errors::ModelError::Validation(_))));

    Ok(())
}

#[test]
fn validators_accept_ordinary_values() {
    assert!(employee::validate_name("Alice").is_ok());
    assert!(employee::validate_email("a@x.com").is_ok());
    assert!(employee::validate_name("").is_err());
    assert!(employee::validate_email("   ").is_err());
}
