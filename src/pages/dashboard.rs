//! Dashboard Page
//!
//! Main view: greeting, risk card, monthly calendar overview, log button.

use chrono::Timelike;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::calendar::DayPress;
use crate::components::MonthCalendar;
use crate::state::global::GlobalState;

/// Greeting for a local wall-clock hour.
fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let now = chrono::Local::now();
    let greeting = greeting_for_hour(now.hour());
    let date_line = now.format("%A, %B %e, %Y").to_string();

    let state_for_press = state.clone();
    let on_day_press = Callback::new(move |press: DayPress| {
        web_sys::console::log_1(&format!("Day pressed: {}", press.date_string).into());

        let logged = state_for_press.attacks_on(&press.date_string);
        if logged == 1 {
            state_for_press.show_success(&format!("1 attack logged on {}", press.date_string));
        } else if logged > 1 {
            state_for_press.show_success(&format!(
                "{} attacks logged on {}",
                logged, press.date_string,
            ));
        }
    });

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{greeting}</h1>
                    <p class="text-gray-400 mt-1">{date_line}</p>
                </div>
                <div class="w-12 h-12 rounded-full bg-gray-700 flex items-center justify-center text-2xl">
                    "👤"
                </div>
            </div>

            // Risk insight card (placeholder; real statistics are out of scope)
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center space-x-2 mb-3">
                    <span class="text-2xl">"🤖"</span>
                    <h2 class="text-lg font-semibold">"AI Insight"</h2>
                </div>
                <p class="text-xl font-bold text-red-400 mb-2">"High Risk Today"</p>
                <p class="text-sm text-gray-400 leading-relaxed">
                    "Based on your patterns, today has a 75% chance of migraine occurrence."
                </p>
            </section>

            // Calendar
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-4">"Monthly Overview"</h2>
                <MonthCalendar
                    marked_dates=state.marked_dates
                    on_day_press=on_day_press
                />

                // Severity legend
                <div class="flex justify-around mt-4 pt-4 border-t border-gray-700">
                    <LegendItem color="#ff4444" label="Severe" />
                    <LegendItem color="#ffaa00" label="Moderate" />
                    <LegendItem color="#44ff44" label="Mild" />
                </div>
            </section>

            // Log new attack button
            <button
                on:click=move |_| navigate("/log", Default::default())
                class="w-full bg-red-600 hover:bg-red-700 rounded-xl py-5 text-lg
                       font-bold transition-colors shadow-lg"
            >
                "Log New Attack"
            </button>
        </div>
    }
}

/// One entry of the severity legend
#[component]
fn LegendItem(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-4 h-4 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-xs text-gray-400">{label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_bands() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }
}
