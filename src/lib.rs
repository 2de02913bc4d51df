//! # ui-essentials
//!
//! Structural components for declarative UI in Rust.
//!
//! A declarative tree says *what* to display; the structural components here
//! decide *which parts* of that tree get produced on a given pass:
//!
//! - [`if_else`] - Conditional rendering with an optional else branch
//! - [`for_of`] - List rendering with per-item iteration metadata and keys
//! - [`switch`] - Multi-way branching over [`Branch`] cases with a default
//! - [`class_list`](helpers::class_list) - CSS class-name composition from
//!   literals and maps
//!
//! ## Architecture
//!
//! The crate never renders anything itself. Every component is generic over
//! `R`, the host framework's displayable unit, and is a pure function of its
//! inputs evaluated once per invocation:
//!
//! ```text
//! host render pass → component → fragment(s) → host display
//! ```
//!
//! No component retains state between calls, so re-invocation with identical
//! inputs is idempotent and re-entrancy is trivially safe.
//!
//! ## Deferred evaluation
//!
//! Branch content is supplied as zero-argument producers (`FnOnce() -> R`)
//! rather than pre-built values. Only the selected branch's producer runs, so
//! content that is only valid under its branch (say, a value known present
//! only when the condition holds) is never evaluated under the other one.
//!
//! ## Modules
//!
//! - [`types`] - Core types ([`Key`], [`KeyedFragment`], [`Producer`])
//! - [`structural`] - The If / ForOf / Switch components
//! - [`helpers`] - Class-name composition

pub mod helpers;
pub mod structural;
pub mod types;

// Re-export commonly used items
pub use types::{Key, KeyedFragment, Producer, ToKey};

pub use structural::{
    Branch, Iteration, KeyAttribute, KeyConfig, KeyFlags, StructureError, When, for_of, if_else,
    switch,
};

pub use helpers::{ClassArg, ClassMap, class_list};
