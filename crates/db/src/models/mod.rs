//! Row structs for the reference tables.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! a conversion into the matching core record type.

pub mod master;
