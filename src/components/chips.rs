//! Chip Group Component
//!
//! Multi-select pill buttons for the logging wizard.

use leptos::*;

/// Toggle an item in a selection list, preserving selection order.
pub fn toggle_selection(selection: &mut Vec<String>, item: &str) {
    if let Some(pos) = selection.iter().position(|s| s == item) {
        selection.remove(pos);
    } else {
        selection.push(item.to_string());
    }
}

/// Multi-select chip group. The caller owns the selection signal.
#[component]
pub fn ChipGroup(
    items: Vec<&'static str>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {items.into_iter().map(|item| view! {
                <button
                    type="button"
                    on:click=move |_| selected.update(|s| toggle_selection(s, item))
                    class=move || {
                        let base = "px-4 py-2 rounded-full text-sm font-medium border-2 transition-colors";
                        if selected.get().iter().any(|s| s == item) {
                            format!("{} bg-red-600 border-red-600 text-white", base)
                        } else {
                            format!("{} bg-gray-700 border-gray-600 text-gray-300 hover:text-white", base)
                        }
                    }
                >
                    {item}
                </button>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Vec::new();

        toggle_selection(&mut selection, "Stress");
        assert_eq!(selection, vec!["Stress"]);

        toggle_selection(&mut selection, "Stress");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_preserves_order() {
        let mut selection = Vec::new();
        toggle_selection(&mut selection, "Nausea");
        toggle_selection(&mut selection, "Aura");
        toggle_selection(&mut selection, "Dizziness");

        toggle_selection(&mut selection, "Aura");
        assert_eq!(selection, vec!["Nausea", "Dizziness"]);
    }
}
