//! UI Components
//!
//! Reusable Leptos components for the tracker.

pub mod calendar;
pub mod charts;
pub mod chips;
pub mod nav;
pub mod slider;
pub mod toast;

pub use calendar::MonthCalendar;
pub use charts::{FrequencyLineChart, TriggerBarChart, TriggerShareList};
pub use chips::ChipGroup;
pub use nav::Nav;
pub use slider::ValueSlider;
pub use toast::Toast;
