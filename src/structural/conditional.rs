//! Conditional rendering - the structural `if..else`.

/// Conditionally produce content, with an optional else branch.
///
/// When `expression` is true the `then` producer runs; otherwise the
/// `otherwise` producer runs if one was supplied. Exactly one producer (or
/// neither) is invoked, so content that is only valid under its branch is
/// never evaluated under the other. A panic inside a producer propagates
/// unmodified.
///
/// # Arguments
///
/// * `expression` - Condition selecting the branch
/// * `then` - Producer for the true branch
/// * `otherwise` - Optional producer for the false branch
///
/// # Returns
///
/// `Some` with the selected producer's content, or `None` when the
/// expression is false and no else branch was supplied.
///
/// # Example
///
/// ```
/// use ui_essentials::if_else;
///
/// let logged_in = true;
/// let greeting = if_else(
///     logged_in,
///     || "Welcome back!".to_string(),
///     Some(|| "Please sign in".to_string()),
/// );
/// assert_eq!(greeting.as_deref(), Some("Welcome back!"));
/// ```
///
/// # Without else branch
///
/// ```
/// use ui_essentials::if_else;
///
/// let fragment = if_else(
///     false,
///     || "hidden".to_string(),
///     None::<fn() -> String>, // Type hint needed for None
/// );
/// assert_eq!(fragment, None);
/// ```
pub fn if_else<R, ThenF, ElseF>(expression: bool, then: ThenF, otherwise: Option<ElseF>) -> Option<R>
where
    ThenF: FnOnce() -> R,
    ElseF: FnOnce() -> R,
{
    if expression {
        Some(then())
    } else {
        otherwise.map(|producer| producer())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_true_renders_then() {
        let fragment = if_else(true, || "A", Some(|| "B"));
        assert_eq!(fragment, Some("A"));
    }

    #[test]
    fn test_false_renders_else() {
        let fragment = if_else(false, || "A", Some(|| "B"));
        assert_eq!(fragment, Some("B"));
    }

    #[test]
    fn test_false_without_else_renders_nothing() {
        let fragment = if_else(false, || "A", None::<fn() -> &'static str>);
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_unselected_else_never_invoked() {
        let else_ran = Rc::new(Cell::new(false));
        let else_ran_probe = else_ran.clone();

        let fragment = if_else(
            true,
            || "A",
            Some(move || {
                else_ran_probe.set(true);
                "B"
            }),
        );

        assert_eq!(fragment, Some("A"));
        assert!(
            !else_ran.get(),
            "else producer must not run when the expression is true"
        );
    }

    #[test]
    fn test_unselected_then_never_invoked() {
        let then_ran = Rc::new(Cell::new(false));
        let then_ran_probe = then_ran.clone();

        let fragment = if_else(
            false,
            move || {
                then_ran_probe.set(true);
                "A"
            },
            None::<fn() -> &'static str>,
        );

        assert_eq!(fragment, None);
        assert!(
            !then_ran.get(),
            "then producer must not run when the expression is false"
        );
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let first = if_else(true, || 1 + 1, Some(|| 0));
        let second = if_else(true, || 1 + 1, Some(|| 0));
        assert_eq!(first, second);
    }
}
