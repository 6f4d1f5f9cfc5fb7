use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::employee::repo::seaorm::SeaOrmEmployeeRepository;
use service::employee::EmployeeService;

/// Shared handler state. The store handle is the only cross-request state;
/// it is passed in explicitly rather than read from a global.
#[derive(Clone)]
pub struct ServerState {
    pub employees: EmployeeService<SeaOrmEmployeeRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmEmployeeRepository::new(db));
        Self { employees: EmployeeService::new(repo) }
    }
}
