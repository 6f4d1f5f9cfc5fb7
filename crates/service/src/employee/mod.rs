//! Employee module: three-layer architecture (domain, repository, service).
//!
//! The repository trait keeps the resource service decoupled from the
//! persistence technology; production uses the SeaORM-backed implementation.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::EmployeeService;
