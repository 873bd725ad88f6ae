//! Core types for Campus Board.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod department;
pub mod email;
pub mod id;

pub use department::{AccessLevel, Department, UnknownDepartment};
pub use email::{Email, EmailError};
pub use id::*;
