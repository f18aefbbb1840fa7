/// Shared building blocks for list pages (search, sorting, UI helpers)
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for row types that support column-keyed sorting
pub trait Sortable<K> {
    /// Compares two rows by the given column key
    fn compare_by(&self, other: &Self, key: K) -> Ordering;
}

/// Sorts rows in place by the given column key.
///
/// The underlying sort is stable, so rows that compare equal keep their
/// relative input order.
pub fn sort_list<T, K>(items: &mut [T], key: K, ascending: bool)
where
    T: Sortable<K>,
    K: Copy,
{
    items.sort_by(|a, b| {
        let cmp = a.compare_by(b, key);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator glyph for a column header
pub fn get_sort_indicator<K: PartialEq>(active: Option<(K, bool)>, field: K) -> &'static str {
    match active {
        Some((key, ascending)) if key == field => {
            if ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// Highlight occurrences of `filter` inside `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.trim().is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span style="background-color: #dbeafe; color: #1e40af; border-radius: 3px;">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the active-state styling)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, updated before the debounce fires
    let (input_value, set_input_value) = signal(String::new());

    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        debounce.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
            *slot = Some(Timeout::new(300, move || {
                on_change.run(new_value);
            }));
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 8px 32px 8px 12px; border: none; background-color: {}; border-radius: 8px; font-size: 0.9rem; outline: none; color: #1f2937;",
                    if is_filter_active() { "#fffbea" } else { "#f3f4f6" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
