//! Log Attack Page
//!
//! Five-step wizard for recording a migraine attack.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{ChipGroup, ValueSlider};
use crate::state::global::{AttackRecord, GlobalState};

/// Placeholder option lists
const SYMPTOMS: [&str; 8] = [
    "Throbbing pain",
    "Nausea",
    "Light sensitivity",
    "Sound sensitivity",
    "Aura",
    "Dizziness",
    "Blurred vision",
    "Neck pain",
];

const TRIGGERS: [&str; 8] = [
    "Stress",
    "Hormonal",
    "Weather change",
    "Lack of sleep",
    "Food",
    "Alcohol",
    "Bright lights",
    "Dehydration",
];

const MEDICATIONS: [&str; 6] = [
    "Ibuprofen",
    "Acetaminophen",
    "Sumatriptan",
    "Excedrin",
    "Prescription",
    "None",
];

/// Wizard step order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Severity,
    Symptoms,
    Triggers,
    Medications,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            WizardStep::Severity => 0,
            WizardStep::Symptoms => 1,
            WizardStep::Triggers => 2,
            WizardStep::Medications => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Severity => "Severity",
            WizardStep::Symptoms => "Symptoms",
            WizardStep::Triggers => "Triggers",
            WizardStep::Medications => "Medications",
            WizardStep::Review => "Review",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Severity => Some(WizardStep::Symptoms),
            WizardStep::Symptoms => Some(WizardStep::Triggers),
            WizardStep::Triggers => Some(WizardStep::Medications),
            WizardStep::Medications => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// The preceding step, or `None` on the first one.
    pub fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::Severity => None,
            WizardStep::Symptoms => Some(WizardStep::Severity),
            WizardStep::Triggers => Some(WizardStep::Symptoms),
            WizardStep::Medications => Some(WizardStep::Triggers),
            WizardStep::Review => Some(WizardStep::Medications),
        }
    }
}

/// Face for a 0-10 severity value.
fn severity_emoji(value: f64) -> &'static str {
    match value {
        v if v <= 2.0 => "😊",
        v if v <= 4.0 => "😐",
        v if v <= 6.0 => "😟",
        v if v <= 8.0 => "😣",
        _ => "😫",
    }
}

/// Review display for a selection list.
fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None selected".to_string()
    } else {
        items.join(", ")
    }
}

/// Attack logging wizard page
#[component]
pub fn LogAttack() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (step, set_step) = create_signal(WizardStep::Severity);
    let (severity, set_severity) = create_signal(5.0);
    let symptoms = create_rw_signal(Vec::<String>::new());
    let triggers = create_rw_signal(Vec::<String>::new());
    let medications = create_rw_signal(Vec::<String>::new());
    let (notes, set_notes) = create_signal(String::new());

    let navigate_back = navigate.clone();
    let on_back = move |_| match step.get().prev() {
        Some(prev) => set_step.set(prev),
        None => navigate_back("/", Default::default()),
    };

    let state_for_save = state.clone();
    let on_next = move |_| match step.get().next() {
        Some(next) => set_step.set(next),
        None => {
            let today = chrono::Local::now().date_naive();
            state_for_save.log_attack(AttackRecord {
                date_string: today.format("%Y-%m-%d").to_string(),
                severity: severity.get(),
                symptoms: symptoms.get(),
                triggers: triggers.get(),
                medications: medications.get(),
                notes: notes.get(),
            });
            state_for_save.show_success("Attack logged");
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="max-w-2xl mx-auto flex flex-col min-h-[80vh]">
            // Progress bar
            <div class="mb-6">
                <div class="h-2 bg-gray-700 rounded-full mb-3">
                    <div
                        class="h-2 bg-red-600 rounded-full transition-all"
                        style=move || format!(
                            "width: {}%",
                            (step.get().index() + 1) * 100 / WizardStep::COUNT,
                        )
                    />
                </div>
                <p class="text-sm text-gray-400 text-center">
                    {move || format!(
                        "Step {} of {}: {}",
                        step.get().index() + 1,
                        WizardStep::COUNT,
                        step.get().label(),
                    )}
                </p>
            </div>

            // Step content
            <div class="flex-1">
                {move || match step.get() {
                    WizardStep::Severity => view! {
                        <div class="space-y-6">
                            <h2 class="text-2xl font-bold text-center">
                                "How severe is your migraine?"
                            </h2>
                            <div class="flex flex-col items-center space-y-2">
                                <span class="text-6xl">
                                    {move || severity_emoji(severity.get())}
                                </span>
                                <span class="text-3xl font-bold text-red-400">
                                    {move || format!("{:.0}/10", severity.get())}
                                </span>
                            </div>
                            <ValueSlider
                                minimum_value=0.0
                                maximum_value=10.0
                                step=1.0
                                value=severity
                                on_value_change=Callback::new(move |v: f64| set_severity.set(v))
                            />
                            <div class="flex justify-between px-1 text-sm text-gray-400">
                                <span>"Mild"</span>
                                <span>"Severe"</span>
                            </div>
                        </div>
                    }.into_view(),
                    WizardStep::Symptoms => view! {
                        <ChipStep
                            title="Select Symptoms"
                            items=SYMPTOMS.to_vec()
                            selected=symptoms
                        />
                    }.into_view(),
                    WizardStep::Triggers => view! {
                        <ChipStep
                            title="Select Triggers"
                            items=TRIGGERS.to_vec()
                            selected=triggers
                        />
                    }.into_view(),
                    WizardStep::Medications => view! {
                        <ChipStep
                            title="Select Medications"
                            items=MEDICATIONS.to_vec()
                            selected=medications
                        />
                    }.into_view(),
                    WizardStep::Review => view! {
                        <div class="space-y-4">
                            <h2 class="text-2xl font-bold text-center mb-6">
                                "Review Your Entry"
                            </h2>

                            <ReviewSection
                                label="Severity"
                                value=Signal::derive(move || format!(
                                    "{:.0}/10 {}",
                                    severity.get(),
                                    severity_emoji(severity.get()),
                                ))
                            />
                            <ReviewSection
                                label="Symptoms"
                                value=Signal::derive(move || symptoms.with(|s| join_or_none(s)))
                            />
                            <ReviewSection
                                label="Triggers"
                                value=Signal::derive(move || triggers.with(|t| join_or_none(t)))
                            />
                            <ReviewSection
                                label="Medications"
                                value=Signal::derive(move || medications.with(|m| join_or_none(m)))
                            />

                            // Optional notes
                            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                                <label class="block text-sm text-gray-400 font-semibold mb-2">
                                    "Notes (Optional)"
                                </label>
                                <textarea
                                    placeholder="Add any additional information about your migraine..."
                                    prop:value=move || notes.get()
                                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                                    rows="4"
                                    class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm
                                           border border-gray-600 focus:border-red-500
                                           focus:outline-none resize-none"
                                />
                            </div>

                            // Placeholder context cards
                            <InfoCard title="📍 Location" text="New York, NY, USA" />
                            <InfoCard title="🌤️ Weather" text="72°F, Partly Cloudy" />
                        </div>
                    }.into_view(),
                }}
            </div>

            // Navigation buttons
            <div class="flex space-x-3 mt-8">
                <button
                    on:click=on_back
                    class="flex-1 py-4 bg-gray-700 hover:bg-gray-600 rounded-lg
                           font-bold transition-colors"
                >
                    "Back"
                </button>
                <button
                    on:click=on_next
                    class="flex-1 py-4 bg-red-600 hover:bg-red-700 rounded-lg
                           font-bold transition-colors"
                >
                    {move || if step.get() == WizardStep::Review { "Save" } else { "Next" }}
                </button>
            </div>
        </div>
    }
}

/// Chip-selection step body
#[component]
fn ChipStep(
    title: &'static str,
    items: Vec<&'static str>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-center">{title}</h2>
            <ChipGroup items=items selected=selected />
        </div>
    }
}

/// One labeled row of the review step
#[component]
fn ReviewSection(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <p class="text-sm text-gray-400 font-semibold mb-1">{label}</p>
            <p>{move || value.get()}</p>
        </div>
    }
}

/// Static context card on the review step
#[component]
fn InfoCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border-l-4 border-blue-400">
            <p class="text-sm font-bold mb-1">{title}</p>
            <p class="text-gray-400">{text}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::Severity.next(), Some(WizardStep::Symptoms));
        assert_eq!(WizardStep::Medications.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);

        assert_eq!(WizardStep::Review.prev(), Some(WizardStep::Medications));
        assert_eq!(WizardStep::Symptoms.prev(), Some(WizardStep::Severity));
        assert_eq!(WizardStep::Severity.prev(), None);
    }

    #[test]
    fn test_step_indices_cover_count() {
        let steps = [
            WizardStep::Severity,
            WizardStep::Symptoms,
            WizardStep::Triggers,
            WizardStep::Medications,
            WizardStep::Review,
        ];
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(steps.len(), WizardStep::COUNT);
    }

    #[test]
    fn test_severity_emoji_bands() {
        assert_eq!(severity_emoji(0.0), "😊");
        assert_eq!(severity_emoji(2.0), "😊");
        assert_eq!(severity_emoji(3.0), "😐");
        assert_eq!(severity_emoji(5.0), "😟");
        assert_eq!(severity_emoji(7.0), "😣");
        assert_eq!(severity_emoji(9.0), "😫");
        assert_eq!(severity_emoji(10.0), "😫");
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "None selected");
        assert_eq!(
            join_or_none(&["Nausea".to_string(), "Aura".to_string()]),
            "Nausea, Aura",
        );
    }
}
