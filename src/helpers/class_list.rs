//! CSS class-name composition.
//!
//! [`class_list`] merges literal names and conditional name/boolean maps
//! into a single space-separated string, preserving argument order
//! throughout. The map type keeps insertion order, so conditional names come
//! out exactly as the caller wrote them.

use hashlink::LinkedHashMap;

/// Conditional class map: class name to inclusion flag, insertion-ordered.
pub type ClassMap = LinkedHashMap<String, bool>;

/// One argument to [`class_list`].
pub enum ClassArg {
    /// Literal class name, always included.
    Name(String),
    /// Conditional map; keys with a true value are included in map order.
    Map(ClassMap),
    /// Absent argument, skipped silently. Lets a whole argument slot be
    /// turned off: `enabled.then(|| ...).into()`.
    Skip,
}

impl From<&str> for ClassArg {
    fn from(name: &str) -> Self {
        ClassArg::Name(name.to_string())
    }
}

impl From<String> for ClassArg {
    fn from(name: String) -> Self {
        ClassArg::Name(name)
    }
}

impl From<ClassMap> for ClassArg {
    fn from(map: ClassMap) -> Self {
        ClassArg::Map(map)
    }
}

impl<A: Into<ClassArg>> From<Option<A>> for ClassArg {
    fn from(arg: Option<A>) -> Self {
        match arg {
            Some(arg) => arg.into(),
            None => ClassArg::Skip,
        }
    }
}

/// Compose a space-separated class string from literals and maps.
///
/// Literal names are taken as-is in argument order. For a map, every key
/// with a true value is taken in the map's own iteration order. [`ClassArg::Skip`]
/// arguments are ignored. Names are never reordered across arguments.
///
/// # Example
///
/// ```
/// use ui_essentials::{class_list, class_map, ClassArg};
///
/// let composed = class_list([
///     ClassArg::from("btn"),
///     class_map! { "btn-primary" => true, "btn-disabled" => false }.into(),
///     ClassArg::Skip,
///     ClassArg::from("large"),
/// ]);
/// assert_eq!(composed, "btn btn-primary large");
/// ```
///
/// The [`class_list!`](crate::class_list!) macro gives the same result with
/// the variadic call shape:
///
/// ```
/// use ui_essentials::{class_list, class_map};
///
/// let composed = class_list!("btn", class_map! { "btn-primary" => true }, "large");
/// assert_eq!(composed, "btn btn-primary large");
/// ```
pub fn class_list<I>(classes: I) -> String
where
    I: IntoIterator<Item = ClassArg>,
{
    let mut compiled: Vec<String> = Vec::new();

    for class in classes {
        match class {
            ClassArg::Name(name) => compiled.push(name),
            ClassArg::Map(map) => {
                for (name, included) in &map {
                    if *included {
                        compiled.push(name.clone());
                    }
                }
            }
            ClassArg::Skip => {}
        }
    }

    compiled.join(" ")
}

/// Build a [`ClassMap`] literal, keeping entry order.
///
/// Keys can be anything `ToString` (non-string keys are coerced to their
/// string form).
///
/// ```
/// use ui_essentials::class_map;
///
/// let map = class_map! { "active" => true, "hidden" => false };
/// assert_eq!(map.get("active"), Some(&true));
/// ```
#[macro_export]
macro_rules! class_map {
    () => {
        $crate::helpers::ClassMap::new()
    };
    ($($name:expr => $included:expr),+ $(,)?) => {{
        let mut map = $crate::helpers::ClassMap::new();
        $( map.insert(::std::string::ToString::to_string(&$name), $included); )+
        map
    }};
}

/// Variadic form of [`class_list`](class_list()): accepts any mix of values convertible
/// to [`ClassArg`] (names, maps, `Option`s for conditional slots).
#[macro_export]
macro_rules! class_list {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::helpers::class_list([$( $crate::helpers::ClassArg::from($arg) ),+])
    };
}

// =============================================================================
// Tests
// =============================================================================
