//! Value Slider Component
//!
//! Custom horizontal slider driven by pointer position on the track.

use leptos::*;

/// Thumb diameter in pixels. The fill boundary sits under the thumb center.
const THUMB_SIZE: f64 = 20.0;

/// Maps a pointer position along the track to a stepped value.
///
/// Callers must supply a well-formed range (`min < max`, `step > 0`); this
/// is a precondition, not a runtime check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderScale {
    /// Convert a track-local x position to a value.
    ///
    /// Returns `None` while the track width is unknown (zero), leaving the
    /// value unchanged and emitting nothing. Positions outside the track
    /// clamp to the range ends.
    pub fn value_at(&self, local_x: f64, track_width: f64) -> Option<f64> {
        if track_width <= 0.0 {
            return None;
        }
        let percentage = (local_x / track_width).clamp(0.0, 1.0);
        let raw = self.min + percentage * (self.max - self.min);
        let stepped = (raw / self.step).round() * self.step;
        Some(stepped.clamp(self.min, self.max))
    }

    /// Fraction of the track covered by the fill for a given value.
    pub fn fill_fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Thumb offset from the track's left edge, in pixels.
///
/// Centered on the fill boundary, clamped so the thumb never renders past
/// the track's width minus its own diameter.
fn thumb_offset(fill_width: f64, track_width: f64) -> f64 {
    (fill_width - THUMB_SIZE / 2.0).clamp(0.0, (track_width - THUMB_SIZE).max(0.0))
}

/// Custom slider component.
///
/// A tap anywhere on the track jumps to that position; press-and-drag keeps
/// following the pointer. Every recomputation fires `on_value_change`, even
/// when the stepped value is unchanged from the previous sample.
#[component]
pub fn ValueSlider(
    #[prop(default = 0.0)] minimum_value: f64,
    #[prop(default = 10.0)] maximum_value: f64,
    #[prop(default = 1.0)] step: f64,
    /// Current value; the caller owns it and updates it via the callback.
    #[prop(into)] value: Signal<f64>,
    #[prop(optional, into)] on_value_change: Option<Callback<f64>>,
    #[prop(default = "#ff4444")] minimum_track_tint_color: &'static str,
    #[prop(default = "#e0e0e0")] maximum_track_tint_color: &'static str,
    #[prop(default = "#ff4444")] thumb_tint_color: &'static str,
) -> impl IntoView {
    let scale = SliderScale {
        min: minimum_value,
        max: maximum_value,
        step,
    };

    let track_ref = create_node_ref::<html::Div>();
    let (track_width, set_track_width) = create_signal(0.0_f64);
    let (dragging, set_dragging) = create_signal(false);

    // Width is unknown until the node is attached to the DOM.
    create_effect(move |_| {
        if let Some(track) = track_ref.get() {
            set_track_width.set(track.get_bounding_client_rect().width());
        }
    });

    let emit = move |local_x: f64, width: f64| {
        if let Some(new_value) = scale.value_at(local_x, width) {
            if let Some(callback) = on_value_change {
                callback.call(new_value);
            }
        }
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let Some(track) = track_ref.get() else { return };
        let rect = track.get_bounding_client_rect();
        set_track_width.set(rect.width());
        let _ = track.set_pointer_capture(ev.pointer_id());
        set_dragging.set(true);
        emit(ev.client_x() as f64 - rect.left(), rect.width());
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !dragging.get_untracked() {
            return;
        }
        let Some(track) = track_ref.get() else { return };
        // The track can shift on screen mid-drag (e.g. under scrolling), so
        // its offset is re-read on every movement sample.
        let rect = track.get_bounding_client_rect();
        set_track_width.set(rect.width());
        emit(ev.client_x() as f64 - rect.left(), rect.width());
    };

    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        set_dragging.set(false);
        if let Some(track) = track_ref.get() {
            let _ = track.release_pointer_capture(ev.pointer_id());
        }
    };

    let fill_width = move || scale.fill_fraction(value.get()) * track_width.get();

    view! {
        <div
            node_ref=track_ref
            class="relative w-full h-5 cursor-pointer touch-none select-none"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            // Unfilled track
            <div
                class="absolute top-1/2 -translate-y-1/2 w-full h-1 rounded-full"
                style=format!("background-color: {}", maximum_track_tint_color)
            />

            // Filled portion
            <div
                class="absolute top-1/2 -translate-y-1/2 h-1 rounded-full"
                style=move || format!(
                    "width: {}px; background-color: {}",
                    fill_width(),
                    minimum_track_tint_color,
                )
            />

            // Thumb
            <div
                class="absolute top-1/2 -translate-y-1/2 w-5 h-5 rounded-full
                       border-2 border-white shadow"
                style=move || format!(
                    "left: {}px; background-color: {}",
                    thumb_offset(fill_width(), track_width.get()),
                    thumb_tint_color,
                )
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: SliderScale = SliderScale { min: 0.0, max: 10.0, step: 1.0 };

    #[test]
    fn test_position_maps_to_stepped_value() {
        // 55/100 -> raw 5.5 -> rounds up to 6
        assert_eq!(SCALE.value_at(55.0, 100.0), Some(6.0));
        assert_eq!(SCALE.value_at(0.0, 100.0), Some(0.0));
        assert_eq!(SCALE.value_at(100.0, 100.0), Some(10.0));
        assert_eq!(SCALE.value_at(50.0, 100.0), Some(5.0));
    }

    #[test]
    fn test_out_of_track_positions_clamp() {
        assert_eq!(SCALE.value_at(-25.0, 100.0), Some(0.0));
        assert_eq!(SCALE.value_at(250.0, 100.0), Some(10.0));
    }

    #[test]
    fn test_zero_track_width_is_a_no_op() {
        assert_eq!(SCALE.value_at(55.0, 0.0), None);
    }

    #[test]
    fn test_same_input_same_output() {
        let first = SCALE.value_at(37.0, 100.0);
        let second = SCALE.value_at(37.0, 100.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_stay_in_range_and_on_step() {
        for x in 0..=100 {
            let value = SCALE.value_at(x as f64, 100.0).unwrap();
            assert!((0.0..=10.0).contains(&value));
            // On the step grid: a whole number for step=1.
            assert_eq!(value, value.round());
        }
    }

    #[test]
    fn test_fractional_step() {
        let scale = SliderScale { min: 0.0, max: 16.0, step: 0.5 };
        // 30/100 -> raw 4.8 -> nearest half is 5.0
        assert_eq!(scale.value_at(30.0, 100.0), Some(5.0));
    }

    #[test]
    fn test_nonzero_minimum() {
        let scale = SliderScale { min: 50.0, max: 300.0, step: 10.0 };
        assert_eq!(scale.value_at(0.0, 100.0), Some(50.0));
        assert_eq!(scale.value_at(100.0, 100.0), Some(300.0));
    }

    #[test]
    fn test_fill_fraction() {
        assert_eq!(SCALE.fill_fraction(0.0), 0.0);
        assert_eq!(SCALE.fill_fraction(5.0), 0.5);
        assert_eq!(SCALE.fill_fraction(10.0), 1.0);
        // Out-of-range values clamp rather than overflow the track.
        assert_eq!(SCALE.fill_fraction(12.0), 1.0);
    }

    #[test]
    fn test_thumb_stays_on_track() {
        // At the left edge the thumb pins to 0 instead of going negative.
        assert_eq!(thumb_offset(0.0, 200.0), 0.0);
        // At the right edge it stops one diameter short of the width.
        assert_eq!(thumb_offset(200.0, 200.0), 180.0);
        // Mid-track it centers on the fill boundary.
        assert_eq!(thumb_offset(100.0, 200.0), 90.0);
    }
}
