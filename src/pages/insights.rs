//! Insights Page
//!
//! Tabbed charts, trigger correlations, and a generated doctor report.
//! All series are placeholder data; real statistics are out of scope.

use leptos::*;

use crate::components::charts::TriggerShare;
use crate::components::{FrequencyLineChart, TriggerBarChart, TriggerShareList};
use crate::state::global::GlobalState;

const FREQUENCY_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const FREQUENCY_DATA: [f64; 6] = [8.0, 12.0, 6.0, 10.0, 14.0, 9.0];

const TRIGGER_LABELS: [&str; 6] = ["Stress", "Weather", "Hormonal", "Sleep", "Food", "Other"];
const TRIGGER_DATA: [f64; 6] = [35.0, 25.0, 15.0, 12.0, 8.0, 5.0];

const TRIGGER_SHARES: [TriggerShare; 6] = [
    TriggerShare { name: "Stress", frequency: 35.0, color: "#ff4444" },
    TriggerShare { name: "Weather", frequency: 25.0, color: "#ffaa00" },
    TriggerShare { name: "Hormonal", frequency: 15.0, color: "#44ff44" },
    TriggerShare { name: "Sleep", frequency: 12.0, color: "#4a90e2" },
    TriggerShare { name: "Food", frequency: 8.0, color: "#9b59b6" },
    TriggerShare { name: "Other", frequency: 5.0, color: "#95a5a6" },
];

const KEY_INSIGHTS: [&str; 4] = [
    "Stress is your most common trigger (35% of attacks)",
    "Weather changes correlate with 25% of migraines",
    "Attacks are more frequent during spring months",
    "Average severity: 6.5/10 over the past 6 months",
];

/// Which insights tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsightsTab {
    Charts,
    Correlations,
    DoctorReport,
}

impl InsightsTab {
    const ALL: [InsightsTab; 3] = [
        InsightsTab::Charts,
        InsightsTab::Correlations,
        InsightsTab::DoctorReport,
    ];

    fn label(self) -> &'static str {
        match self {
            InsightsTab::Charts => "Charts",
            InsightsTab::Correlations => "Correlations",
            InsightsTab::DoctorReport => "Doctor Report",
        }
    }
}

/// Insights page component
#[component]
pub fn Insights() -> impl IntoView {
    let (tab, set_tab) = create_signal(InsightsTab::Charts);

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Insights & Reports"</h1>
                <p class="text-gray-400 mt-1">"Patterns across your logged attacks"</p>
            </div>

            // Tab selector
            <div class="flex space-x-2">
                {InsightsTab::ALL.into_iter().map(|target| view! {
                    <button
                        on:click=move |_| set_tab.set(target)
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                            if tab.get() == target {
                                format!("{} bg-red-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                            }
                        }
                    >
                        {target.label()}
                    </button>
                }).collect_view()}
            </div>

            // Active tab content
            {move || match tab.get() {
                InsightsTab::Charts => view! { <ChartsTab /> }.into_view(),
                InsightsTab::Correlations => view! { <CorrelationsTab /> }.into_view(),
                InsightsTab::DoctorReport => view! { <DoctorReportTab /> }.into_view(),
            }}
        </div>
    }
}

/// Frequency charts
#[component]
fn ChartsTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Monthly Frequency"</h2>
                <FrequencyLineChart
                    data=FREQUENCY_DATA.to_vec()
                    labels=FREQUENCY_LABELS.to_vec()
                />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Trigger Frequency"</h2>
                <TriggerBarChart
                    data=TRIGGER_DATA.to_vec()
                    labels=TRIGGER_LABELS.to_vec()
                />
            </section>
        </div>
    }
}

/// Trigger breakdown and key findings
#[component]
fn CorrelationsTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Trigger Correlation"</h2>
                <TriggerShareList entries=TRIGGER_SHARES.to_vec() />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Key Insights"</h2>
                <ul class="space-y-3">
                    {KEY_INSIGHTS.into_iter().map(|insight| view! {
                        <li class="flex items-start space-x-2 text-gray-300">
                            <span class="text-red-400">"•"</span>
                            <span>{insight}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}

/// Generated patient report
#[component]
fn DoctorReportTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let generated = chrono::Local::now().format("%B %e, %Y").to_string();

    let on_export = move |_| {
        // PDF generation is handled outside this app.
        state.show_error("PDF export is not available yet");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <div>
                <h2 class="text-2xl font-bold">"Patient Report"</h2>
                <p class="text-sm text-gray-400 mt-1">{format!("Generated: {}", generated)}</p>
            </div>

            <ReportSection title="Summary">
                <p>
                    "Over the past 6 months, you have logged 59 migraine attacks with an \
                     average severity of 6.5/10. The most common triggers are stress (35%), \
                     weather changes (25%), and hormonal factors (15%)."
                </p>
            </ReportSection>

            <ReportSection title="Frequency">
                <ReportLines lines=vec![
                    "Average: 9.8 attacks per month",
                    "Highest month: May (14 attacks)",
                    "Lowest month: March (6 attacks)",
                ] />
            </ReportSection>

            <ReportSection title="Common Symptoms">
                <ReportLines lines=vec![
                    "Throbbing pain (85%)",
                    "Light sensitivity (72%)",
                    "Nausea (68%)",
                    "Sound sensitivity (55%)",
                ] />
            </ReportSection>

            <ReportSection title="Medications Used">
                <ReportLines lines=vec![
                    "Ibuprofen: 42% of attacks",
                    "Sumatriptan: 28% of attacks",
                    "Acetaminophen: 20% of attacks",
                    "Other: 10% of attacks",
                ] />
            </ReportSection>

            <ReportSection title="Recommendations">
                <ReportLines lines=vec![
                    "Consider stress management techniques",
                    "Monitor weather patterns and plan accordingly",
                    "Maintain consistent sleep schedule",
                    "Discuss preventive medication options with your doctor",
                ] />
            </ReportSection>

            <button
                on:click=on_export
                class="w-full py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                       font-medium transition-colors"
            >
                "📄 Export Report as PDF"
            </button>
        </section>
    }
}

/// Titled section of the report
#[component]
fn ReportSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold text-red-400 mb-2">{title}</h3>
            <div class="text-gray-300 text-sm leading-relaxed">
                {children()}
            </div>
        </div>
    }
}

/// Bulleted report lines
#[component]
fn ReportLines(lines: Vec<&'static str>) -> impl IntoView {
    view! {
        <ul class="space-y-1">
            {lines.into_iter().map(|line| view! {
                <li>{format!("• {}", line)}</li>
            }).collect_view()}
        </ul>
    }
}
