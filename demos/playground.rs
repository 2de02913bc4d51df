//! Playground for the structural components.
//!
//! Stands in for a host framework by using `String` as the displayable unit
//! and printing the produced fragments. Run with:
//!
//! ```text
//! cargo run --example playground
//! ```
//!
//! Set `RUST_LOG=warn` to see the key diagnostics from `for_of`.

use ui_essentials::{Branch, Key, KeyConfig, ToKey, class_list, class_map, for_of, if_else, switch};

#[derive(Debug, Clone, Copy, PartialEq)]
enum FetchStatus {
    NotSent,
    Sending,
    Aborted,
    Error,
    Done,
}

#[derive(Debug, Clone)]
struct Issue {
    id: i32,
    title: String,
}

// Issues are keyed by field, not by themselves.
impl ToKey for Issue {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== If (structural) ===");
    for logged_in in [true, false] {
        let fragment = if_else(
            logged_in,
            || "I am displayed!".to_string(),
            Some(|| "I am the else".to_string()),
        );
        println!("logged_in={logged_in}: {}", fragment.unwrap());
    }

    println!();
    println!("=== Switch (structural) ===");
    for status in [
        FetchStatus::NotSent,
        FetchStatus::Sending,
        FetchStatus::Error,
        FetchStatus::Done,
    ] {
        let fragment = switch(
            &status,
            vec![
                Branch::case_any([FetchStatus::NotSent, FetchStatus::Aborted], || {
                    "Click on \"fetch\" to fetch the issue".to_string()
                }),
                Branch::case(FetchStatus::Sending, || "Fetching...".to_string()),
                Branch::case(FetchStatus::Error, || {
                    "Error while fetching the issue data".to_string()
                }),
                Branch::fallback(|| "Issue loaded".to_string()),
            ],
        )
        .expect("branch list is well formed");
        println!("{status:?}: {}", fragment.unwrap());
    }

    println!();
    println!("=== ForOf (structural) ===");
    let issues = vec![
        Issue { id: 1, title: "One".to_string() },
        Issue { id: 2, title: "Two".to_string() },
        Issue { id: 3, title: "Three".to_string() },
    ];
    let fragments = for_of(
        Some(issues.as_slice()),
        |it| {
            let row_classes = class_list!(
                "row",
                class_map! {
                    "row-odd" => it.is_odd,
                    "row-even" => it.is_even,
                    "row-first" => it.is_first,
                    "row-last" => it.is_last,
                },
            );
            format!(
                "{} | index {} of {} | class=\"{row_classes}\"",
                it.item.title, it.index, it.length
            )
        },
        &KeyConfig::field(|issue: &Issue| Key::from(issue.id)),
    );
    for keyed in &fragments {
        let key = keyed
            .key
            .as_ref()
            .map(|key| key.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("key={key}: {}", keyed.fragment);
    }

    println!();
    println!("=== classList (helper) ===");
    let disabled = false;
    println!(
        "{}",
        class_list!(
            "btn",
            class_map! { "btn-primary" => true, "btn-disabled" => disabled },
            disabled.then(|| "no-pointer"),
        )
    );
}
