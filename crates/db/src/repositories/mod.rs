//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod address_master_repo;
pub mod postal_master_repo;

pub use address_master_repo::AddressMasterRepo;
pub use postal_master_repo::PostalMasterRepo;
