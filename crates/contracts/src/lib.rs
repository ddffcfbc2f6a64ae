//! Shared contracts between the admin frontend and the catalog backend
//!
//! Pure data types only: no wasm, no DOM. Everything here is testable
//! with a plain `cargo test` on the host.

pub mod domain;
pub mod enums;
