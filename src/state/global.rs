//! Global Application State
//!
//! Reactive state management using Leptos signals.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Attacks logged during this session
    pub attacks: RwSignal<Vec<AttackRecord>>,
    /// Calendar markers keyed by ISO date string (`YYYY-MM-DD`)
    pub marked_dates: RwSignal<HashMap<String, DayMarker>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A single logged migraine attack
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttackRecord {
    /// ISO date string of the attack day
    pub date_string: String,
    /// Severity on the 0-10 scale
    pub severity: f64,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Marker attached to a calendar date
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayMarker {
    /// CSS color used as the day cell background
    pub color: String,
}

/// Map a 0-10 severity to its marker color.
///
/// Bands match the dashboard legend: mild green, moderate amber, severe red.
pub fn severity_color(severity: f64) -> &'static str {
    match severity {
        s if s <= 3.0 => "#44ff44",
        s if s <= 6.0 => "#ffaa00",
        _ => "#ff4444",
    }
}

/// Placeholder markers for the current month so the dashboard has something
/// to show before any attacks are logged this session.
pub fn seed_marked_dates(today: NaiveDate) -> HashMap<String, DayMarker> {
    let day_color = [
        (5, "#ff4444"),
        (12, "#ffaa00"),
        (18, "#ff4444"),
        (22, "#44ff44"),
        (28, "#ffaa00"),
    ];

    let mut marked = HashMap::new();
    for (day, color) in day_color {
        // Every month has at least 28 days, so these are always valid.
        let date = format!("{:04}-{:02}-{:02}", today.year(), today.month(), day);
        marked.insert(date, DayMarker { color: color.to_string() });
    }
    marked.insert(
        today.format("%Y-%m-%d").to_string(),
        DayMarker { color: "#ff4444".to_string() },
    );
    marked
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let today = chrono::Local::now().date_naive();
    let state = GlobalState {
        attacks: create_rw_signal(Vec::new()),
        marked_dates: create_rw_signal(seed_marked_dates(today)),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Append a logged attack and mark its calendar date by severity.
    pub fn log_attack(&self, record: AttackRecord) {
        self.marked_dates.update(|marked| {
            marked.insert(
                record.date_string.clone(),
                DayMarker { color: severity_color(record.severity).to_string() },
            );
        });
        self.attacks.update(|attacks| attacks.push(record));
    }

    /// Number of attacks logged this session on a given ISO date.
    pub fn attacks_on(&self, date_string: &str) -> usize {
        self.attacks.with(|attacks| {
            attacks.iter().filter(|a| a.date_string == date_string).count()
        })
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_bands() {
        assert_eq!(severity_color(0.0), "#44ff44");
        assert_eq!(severity_color(3.0), "#44ff44");
        assert_eq!(severity_color(4.0), "#ffaa00");
        assert_eq!(severity_color(6.0), "#ffaa00");
        assert_eq!(severity_color(7.0), "#ff4444");
        assert_eq!(severity_color(10.0), "#ff4444");
    }

    #[test]
    fn test_seed_marks_fixed_days_and_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let marked = seed_marked_dates(today);

        assert_eq!(marked.len(), 6);
        assert_eq!(marked.get("2024-03-05").unwrap().color, "#ff4444");
        assert_eq!(marked.get("2024-03-22").unwrap().color, "#44ff44");
        assert!(marked.contains_key("2024-03-15"));
    }

    #[test]
    fn test_seed_today_on_fixed_day_keeps_map_dense() {
        // Today falling on a seeded day overwrites rather than duplicates.
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let marked = seed_marked_dates(today);

        assert_eq!(marked.len(), 5);
        assert_eq!(marked.get("2024-03-12").unwrap().color, "#ff4444");
    }
}
