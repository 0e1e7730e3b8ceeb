//! Static (non-animated) color picked from a stop list at a fixed phase.

use crate::markup::component::TextColor;

/// Returns the color at `phase` along `stops`.
///
/// A negative phase walks the stops in reverse, starting from `1 + phase`.
pub fn transition_color(stops: &[TextColor], phase: f64) -> TextColor {
    let Some(&first) = stops.first() else {
        return TextColor::default();
    };
    if stops.len() == 1 {
        return first;
    }

    let mut phase = phase as f32;
    let reversed = phase < 0.0;
    let mut ordered = stops.to_vec();
    if reversed {
        phase += 1.0;
        ordered.reverse();
    }

    let segments = (ordered.len() - 1) as f32;
    let step = 1.0 / segments;
    for index in 1..ordered.len() {
        let point = index as f32 * step;
        if point >= phase {
            let factor = 1.0 + (phase - point) * segments;
            return if reversed {
                TextColor::lerp(1.0 - factor, ordered[index], ordered[index - 1])
            } else {
                TextColor::lerp(factor, ordered[index - 1], ordered[index])
            };
        }
    }
    ordered[0]
}
