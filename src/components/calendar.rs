//! Month Calendar Component
//!
//! Calendar grid with per-day markers, today highlight, and month navigation.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::state::global::DayMarker;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Payload emitted when a day cell is tapped
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayPress {
    /// ISO date string (`YYYY-MM-DD`) of the tapped day
    pub date_string: String,
}

/// The (year, month) pair currently displayed by the grid.
///
/// Owned by the calendar component and only changed through `next`/`prev`,
/// which keep `month` in `1..=12` and always land on day 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    /// The real current month.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self { year: today.year(), month: today.month() }
    }

    /// The month after this one, crossing year boundaries.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// The month before this one, crossing year boundaries.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Weekday index of day 1 (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Number of days in this month, leap years included.
    pub fn days_in_month(self) -> u32 {
        let first = self.first_day();
        let next = self.next().first_day();
        next.signed_duration_since(first).num_days() as u32
    }

    /// ISO date string for a day of this month.
    pub fn iso_date(self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// Display title, e.g. "March 2024".
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// A single cell of the month grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridCell {
    /// Leading placeholder before day 1; renders empty and non-interactive
    Blank,
    Day {
        day: u32,
        date_string: String,
        is_today: bool,
    },
}

/// State classes for a day cell.
///
/// The today ring applies whether or not the day is marked; the marked
/// background is carried separately by the cell style, so a marked today
/// keeps its background under the ring.
fn day_cell_classes(is_today: bool, is_marked: bool) -> &'static str {
    match (is_today, is_marked) {
        (true, _) => "border-2 border-red-500 font-bold",
        (false, true) => "font-bold text-white",
        (false, false) => "text-gray-200 hover:bg-gray-700",
    }
}

/// Background style for a day cell, from its marker.
fn day_cell_style(marker: Option<&DayMarker>) -> Option<String> {
    marker.map(|m| format!("background-color: {}", m.color))
}

/// Build the ordered cells for a month: `first_weekday_offset` blanks
/// followed by one cell per day. No trailing fill.
pub fn month_cells(month: MonthRef, today: NaiveDate) -> Vec<GridCell> {
    let offset = month.first_weekday_offset();
    let days = month.days_in_month();

    let mut cells = Vec::with_capacity((offset + days) as usize);
    for _ in 0..offset {
        cells.push(GridCell::Blank);
    }
    for day in 1..=days {
        let is_today = month.year == today.year()
            && month.month == today.month()
            && day == today.day();
        cells.push(GridCell::Day {
            day,
            date_string: month.iso_date(day),
            is_today,
        });
    }
    cells
}

/// Month calendar component.
///
/// `marked_dates` is read-only here; the caller owns the map. Tapping a day
/// emits its ISO date string through `on_day_press`.
#[component]
pub fn MonthCalendar(
    #[prop(into)] marked_dates: Signal<HashMap<String, DayMarker>>,
    #[prop(optional, into)] on_day_press: Option<Callback<DayPress>>,
) -> impl IntoView {
    let (month, set_month) = create_signal(MonthRef::current());

    view! {
        <div>
            // Header: month title between navigation controls
            <div class="flex items-center justify-between px-2 mb-2">
                <button
                    on:click=move |_| set_month.update(|m| *m = m.prev())
                    class="px-3 py-1 text-2xl font-bold text-red-400 hover:text-red-300"
                >
                    "‹"
                </button>
                <span class="text-lg font-semibold">
                    {move || month.get().label()}
                </span>
                <button
                    on:click=move |_| set_month.update(|m| *m = m.next())
                    class="px-3 py-1 text-2xl font-bold text-red-400 hover:text-red-300"
                >
                    "›"
                </button>
            </div>

            // Weekday header row
            <div class="grid grid-cols-7 mb-1">
                {WEEK_DAYS.iter().map(|day| view! {
                    <div class="text-center text-xs font-semibold text-gray-400 py-1">
                        {*day}
                    </div>
                }).collect_view()}
            </div>

            // Day grid
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    let today = chrono::Local::now().date_naive();
                    let marked = marked_dates.get();

                    month_cells(month.get(), today).into_iter().map(|cell| {
                        match cell {
                            GridCell::Blank => view! {
                                <div class="aspect-square" />
                            }.into_view(),
                            GridCell::Day { day, date_string, is_today } => {
                                let marker = marked.get(&date_string).cloned();
                                let press_date = date_string.clone();
                                let on_click = move |_| {
                                    if let Some(callback) = on_day_press {
                                        callback.call(DayPress {
                                            date_string: press_date.clone(),
                                        });
                                    }
                                };

                                let class = format!(
                                    "relative aspect-square flex items-center justify-center \
                                     rounded-full text-sm transition-colors {}",
                                    day_cell_classes(is_today, marker.is_some()),
                                );
                                let style = day_cell_style(marker.as_ref());

                                view! {
                                    <button class=class style=style on:click=on_click>
                                        {day}
                                        {marker.map(|_| view! {
                                            <span class="absolute bottom-1 w-1 h-1 rounded-full bg-white" />
                                        })}
                                    </button>
                                }.into_view()
                            }
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthRef { year: 2024, month: 1 }.days_in_month(), 31);
        assert_eq!(MonthRef { year: 2024, month: 4 }.days_in_month(), 30);
        // Leap-year February
        assert_eq!(MonthRef { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthRef { year: 2023, month: 2 }.days_in_month(), 28);
        // Century rules: 1900 is not a leap year, 2000 is
        assert_eq!(MonthRef { year: 1900, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthRef { year: 2000, month: 2 }.days_in_month(), 29);
    }

    #[test]
    fn test_first_weekday_offset() {
        // 2024-03-01 was a Friday
        assert_eq!(MonthRef { year: 2024, month: 3 }.first_weekday_offset(), 5);
        // 2025-06-01 was a Sunday
        assert_eq!(MonthRef { year: 2025, month: 6 }.first_weekday_offset(), 0);
        // 2025-01-01 was a Wednesday
        assert_eq!(MonthRef { year: 2025, month: 1 }.first_weekday_offset(), 3);
    }

    #[test]
    fn test_month_rollover() {
        let dec = MonthRef { year: 2024, month: 12 };
        assert_eq!(dec.next(), MonthRef { year: 2025, month: 1 });

        let jan = MonthRef { year: 2025, month: 1 };
        assert_eq!(jan.prev(), MonthRef { year: 2024, month: 12 });

        // Mid-year navigation stays in the same year.
        let jun = MonthRef { year: 2025, month: 6 };
        assert_eq!(jun.next(), MonthRef { year: 2025, month: 7 });
        assert_eq!(jun.prev(), MonthRef { year: 2025, month: 5 });
    }

    #[test]
    fn test_cell_count_is_offset_plus_days() {
        let month = MonthRef { year: 2024, month: 3 };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let cells = month_cells(month, today);

        assert_eq!(cells.len(), (5 + 31) as usize);
        assert!(cells[..5].iter().all(|c| *c == GridCell::Blank));
        assert!(matches!(cells[5], GridCell::Day { day: 1, .. }));
        assert!(matches!(cells.last(), Some(GridCell::Day { day: 31, .. })));
    }

    #[test]
    fn test_iso_date_is_zero_padded() {
        let month = MonthRef { year: 2024, month: 3 };
        assert_eq!(month.iso_date(5), "2024-03-05");
        assert_eq!(month.iso_date(31), "2024-03-31");
    }

    #[test]
    fn test_today_flag_set_by_calendar_date_only() {
        let month = MonthRef { year: 2024, month: 3 };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let cells = month_cells(month, today);

        let today_days: Vec<u32> = cells.iter().filter_map(|c| match c {
            GridCell::Day { day, is_today: true, .. } => Some(*day),
            _ => None,
        }).collect();
        assert_eq!(today_days, vec![15]);

        // A different displayed month never flags a today cell.
        let other = month_cells(MonthRef { year: 2024, month: 4 }, today);
        assert!(other.iter().all(|c| !matches!(c, GridCell::Day { is_today: true, .. })));
    }

    #[test]
    fn test_marked_day_carries_marker_color() {
        let marker = DayMarker { color: "#ff4444".to_string() };
        assert_eq!(
            day_cell_style(Some(&marker)),
            Some("background-color: #ff4444".to_string()),
        );
        // Unmarked days get no background override.
        assert_eq!(day_cell_style(None), None);
    }

    #[test]
    fn test_today_ring_is_independent_of_marking() {
        // A marked today keeps the ring; the marked background is applied
        // separately via the cell style, so both layers render.
        assert_eq!(day_cell_classes(true, true), day_cell_classes(true, false));
        assert!(day_cell_classes(true, true).contains("border-2"));
        assert!(!day_cell_classes(false, true).contains("border-2"));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(MonthRef { year: 2024, month: 3 }.label(), "March 2024");
        assert_eq!(MonthRef { year: 2025, month: 12 }.label(), "December 2025");
    }
}
