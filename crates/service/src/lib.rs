//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod address;
pub mod db;
pub mod errors;
#[cfg(test)]
pub mod test_support;
