//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through a repository trait.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types independent of the web framework.

pub mod employee;
pub mod errors;
#[cfg(test)]
pub mod test_support;
