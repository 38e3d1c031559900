//! License string classification and category compatibility.
//!
//! - [`classifier`] — maps raw license strings (including `or`/`and` joined
//!   multi-license declarations) to a [`LicenseCategory`](crate::models::LicenseCategory).
//! - [`matrix`] — static project-category × dependency-category
//!   compatibility table.

pub mod classifier;
pub mod matrix;
