//! Branch selection - the structural `switch..case..default`.
//!
//! [`switch`] evaluates an ordered list of [`Branch`] elements against an
//! expression and produces the first matching case's content, the trailing
//! default's content, or nothing. Branches form a closed sum type, so the
//! only malformed shape a caller can build is a default outside the final
//! position - and that is a fail-fast [`StructureError`], not something
//! silently skipped.

use thiserror::Error;

use crate::types::Producer;

// =============================================================================
// Errors
// =============================================================================

/// Structural configuration error in a declarative tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A default branch occupied a non-final position. Every branch before
    /// the final one must be a case.
    #[error("every branch before the final position must be a case; found a default at position {position}")]
    MisplacedDefault {
        /// Zero-based position of the offending branch.
        position: usize,
    },
}

// =============================================================================
// Branches
// =============================================================================

/// Case condition: a single value or a set matched with OR semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum When<T> {
    /// Matches when the expression equals the value.
    Value(T),
    /// Matches when the expression equals any entry (first hit
    /// short-circuits).
    AnyOf(Vec<T>),
}

impl<T: PartialEq> When<T> {
    /// Whether the expression satisfies this condition.
    ///
    /// Equality is `PartialEq` on the concrete discriminant type - strict,
    /// no coercion.
    pub fn matches(&self, expression: &T) -> bool {
        match self {
            When::Value(value) => value == expression,
            When::AnyOf(values) => values.iter().any(|value| value == expression),
        }
    }
}

/// One branch of a [`switch`]: a case with a condition, or the default.
///
/// Content is a deferred [`Producer`]; only the selected branch's producer
/// is ever invoked.
pub enum Branch<T, R> {
    /// Conditional branch.
    Case {
        /// Condition matched against the switch expression.
        when: When<T>,
        /// Content producer, invoked only when this case is selected.
        render: Producer<R>,
    },
    /// Fallback branch, only valid in the final position.
    Default {
        /// Content producer, invoked only when no case matched.
        render: Producer<R>,
    },
}

impl<T, R> Branch<T, R> {
    /// Case matching a single value.
    pub fn case(when: T, render: impl FnOnce() -> R + 'static) -> Self {
        Branch::Case {
            when: When::Value(when),
            render: Box::new(render),
        }
    }

    /// Case matching any of a set of values.
    pub fn case_any(when: impl Into<Vec<T>>, render: impl FnOnce() -> R + 'static) -> Self {
        Branch::Case {
            when: When::AnyOf(when.into()),
            render: Box::new(render),
        }
    }

    /// Default branch. Must be the last element of the branch list.
    pub fn fallback(render: impl FnOnce() -> R + 'static) -> Self {
        Branch::Default {
            render: Box::new(render),
        }
    }
}

// =============================================================================
// switch
// =============================================================================

/// Select and produce the first branch matching an expression.
///
/// Branches are scanned in declaration order. If the final branch is a
/// [`Branch::Default`] it is held back as the fallback; every scanned branch
/// must then be a case. The first matching case wins and scanning stops
/// immediately, so earlier declarations take precedence even when several
/// would match. With no match the fallback is produced, and with no fallback
/// nothing is.
///
/// # Errors
///
/// A default branch encountered during the scan (that is, anywhere but the
/// final position) aborts the render with
/// [`StructureError::MisplacedDefault`]. Because scanning stops at the first
/// match, a misplaced default after the matching case is never reached.
///
/// # Example
///
/// ```
/// use ui_essentials::{Branch, switch};
///
/// #[derive(PartialEq)]
/// enum Status { NotSent, Sending, Aborted, Error, Done }
///
/// let status = Status::Sending;
/// let fragment = switch(
///     &status,
///     vec![
///         Branch::case_any([Status::NotSent, Status::Aborted], || "Press fetch to start"),
///         Branch::case(Status::Sending, || "Fetching..."),
///         Branch::case(Status::Error, || "Fetch failed"),
///         Branch::fallback(|| "Done"),
///     ],
/// )?;
/// assert_eq!(fragment, Some("Fetching..."));
/// # Ok::<(), ui_essentials::StructureError>(())
/// ```
pub fn switch<T, R>(
    expression: &T,
    mut branches: Vec<Branch<T, R>>,
) -> Result<Option<R>, StructureError>
where
    T: PartialEq,
{
    if branches.is_empty() {
        return Ok(None);
    }

    // A trailing default is the fallback; it is excluded from the scan.
    let fallback = if matches!(branches.last(), Some(Branch::Default { .. })) {
        match branches.pop() {
            Some(Branch::Default { render }) => Some(render),
            _ => None,
        }
    } else {
        None
    };

    for (position, branch) in branches.into_iter().enumerate() {
        match branch {
            Branch::Default { .. } => {
                return Err(StructureError::MisplacedDefault { position });
            }
            Branch::Case { when, render } => {
                if when.matches(expression) {
                    return Ok(Some(render()));
                }
            }
        }
    }

    Ok(fallback.map(|render| render()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample_branches() -> Vec<Branch<i32, &'static str>> {
        vec![
            Branch::case_any([1, 2], || "one-or-two"),
            Branch::case(3, || "three"),
            Branch::fallback(|| "default"),
        ]
    }

    #[test]
    fn test_set_condition_matches_any_entry() {
        let fragment = switch(&2, sample_branches()).unwrap();
        assert_eq!(fragment, Some("one-or-two"));
    }

    #[test]
    fn test_single_value_condition_matches() {
        let fragment = switch(&3, sample_branches()).unwrap();
        assert_eq!(fragment, Some("three"));
    }

    #[test]
    fn test_no_match_selects_default() {
        let fragment = switch(&99, sample_branches()).unwrap();
        assert_eq!(fragment, Some("default"));
    }

    #[test]
    fn test_only_default_is_selected() {
        let branches: Vec<Branch<i32, _>> = vec![Branch::fallback(|| "default")];
        let fragment = switch(&1, branches).unwrap();
        assert_eq!(fragment, Some("default"));
    }

    #[test]
    fn test_empty_branch_list_renders_nothing() {
        let fragment = switch(&1, Vec::<Branch<i32, &str>>::new()).unwrap();
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_no_match_without_default_renders_nothing() {
        let branches = vec![Branch::case(1, || "one")];
        let fragment = switch(&2, branches).unwrap();
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_overlapping_conditions_earlier_declaration_wins() {
        // Both cases match 2; declaration order decides, every time.
        for _ in 0..3 {
            let branches = vec![
                Branch::case_any([1, 2], || "first"),
                Branch::case(2, || "second"),
            ];
            let fragment = switch(&2, branches).unwrap();
            assert_eq!(fragment, Some("first"));
        }
    }

    #[test]
    fn test_unselected_producers_never_invoked() {
        let probe = Rc::new(Cell::new(0u32));

        let late_probe = probe.clone();
        let default_probe = probe.clone();
        let branches = vec![
            Branch::case(1, || "one"),
            Branch::case(2, move || {
                late_probe.set(late_probe.get() + 1);
                "two"
            }),
            Branch::fallback(move || {
                default_probe.set(default_probe.get() + 1);
                "default"
            }),
        ];

        let fragment = switch(&1, branches).unwrap();
        assert_eq!(fragment, Some("one"));
        assert_eq!(
            probe.get(),
            0,
            "only the selected branch's producer may run"
        );
    }

    #[test]
    fn test_misplaced_default_is_an_error() {
        let branches = vec![
            Branch::fallback(|| "default"),
            Branch::case(1, || "one"),
        ];
        let result = switch(&1, branches);
        assert_eq!(
            result,
            Err(StructureError::MisplacedDefault { position: 0 })
        );
    }

    #[test]
    fn test_misplaced_default_before_match_is_an_error() {
        let branches = vec![
            Branch::case(1, || "one"),
            Branch::fallback(|| "default"),
            Branch::case(3, || "three"),
        ];
        let result = switch(&3, branches);
        assert_eq!(
            result,
            Err(StructureError::MisplacedDefault { position: 1 }),
            "the scan must fail before reaching the later case"
        );
    }

    #[test]
    fn test_match_before_misplaced_default_short_circuits() {
        // Scanning stops at the first match, so the malformed tail is never
        // inspected.
        let branches = vec![
            Branch::case(1, || "one"),
            Branch::fallback(|| "default"),
            Branch::case(3, || "three"),
        ];
        let fragment = switch(&1, branches).unwrap();
        assert_eq!(fragment, Some("one"));
    }

    #[test]
    fn test_string_discriminant() {
        let value = "value_2".to_string();
        let branches = vec![
            Branch::case("value_1".to_string(), || "Case: Value 1 selected"),
            Branch::case("value_2".to_string(), || "Case: Value 2 selected"),
            Branch::fallback(|| "Default: None selected"),
        ];
        let fragment = switch(&value, branches).unwrap();
        assert_eq!(fragment, Some("Case: Value 2 selected"));
    }
}
