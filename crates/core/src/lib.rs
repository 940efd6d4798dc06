//! Core types for the dynarow table access layer.
//!
//! Everything here is pure and store-agnostic: the declared key shape of a
//! table, the key validator, the record schema seam, and the error taxonomy
//! shared by every operation. The store-facing side lives in the `dynarow`
//! crate.

pub mod error;
pub mod schema;
pub mod table;
