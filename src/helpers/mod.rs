//! Presentation helpers.
//!
//! - [`class_list`](class_list()) - CSS class-name composition from literals
//!   and maps

mod class_list;

pub use class_list::{ClassArg, ClassMap, class_list};
