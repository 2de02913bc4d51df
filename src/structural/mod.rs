//! Structural Components - Conditional, iteration, and branch selection.
//!
//! This module provides the control flow components:
//! - [`if_else`] - Conditional rendering with an optional else branch
//! - [`for_of`] - List rendering with iteration metadata and derived keys
//! - [`switch`] - First-match branch selection over [`Branch`] elements
//!
//! # Evaluation model
//!
//! Each component is evaluated once per host render pass. Inputs go in,
//! fragments come out, nothing is retained. Content is passed as producers
//! (zero-argument closures) so only the selected branch is ever built.

mod conditional;
mod for_of;
mod switch;

pub use conditional::if_else;
pub use for_of::{Iteration, KeyAttribute, KeyConfig, KeyFlags, for_of};
pub use switch::{Branch, StructureError, When, switch};
