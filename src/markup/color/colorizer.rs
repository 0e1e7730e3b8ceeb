//! Per-position color generators.
//!
//! A colorizer is initialized with the number of visual units it will cover,
//! then queried once per unit: `color()` for the current unit, `advance()` to
//! move to the next. Both generators use 16.16 fixed-point positions.

use crate::markup::component::TextColor;
use once_cell::sync::Lazy;

const PRECISION: i32 = 16;
const SCALE: i32 = 1 << PRECISION;
const MASK: i32 = SCALE - 1;

/// Most segments whose full span still fits a 16.16 position.
const MAX_SEGMENTS: i32 = i32::MAX >> PRECISION;

/// Most stops a gradient may have.
pub const MAX_GRADIENT_STOPS: usize = MAX_SEGMENTS as usize + 1;

const HUE_BITS: i32 = 8;
const HUE_STEPS: i32 = 1 << HUE_BITS;
const HUE_MASK: i32 = HUE_STEPS - 1;

/// Precomputed full-saturation, full-value hues around the color wheel.
static HUE_TABLE: Lazy<[TextColor; HUE_STEPS as usize]> = Lazy::new(|| {
    let mut table = [TextColor::BLACK; HUE_STEPS as usize];
    for (index, slot) in table.iter_mut().enumerate() {
        *slot = TextColor::from_hsv(index as f32 / HUE_STEPS as f32, 1.0, 1.0);
    }
    table
});

pub trait Colorizer {
    /// Prepares the generator to spread over `units` positions.
    fn init(&mut self, units: usize);

    fn color(&self) -> TextColor;

    fn advance(&mut self);

    fn advance_by(&mut self, units: usize) {
        for _ in 0..units {
            self.advance();
        }
    }
}

fn units_as_i32(units: usize) -> i32 {
    i32::try_from(units).unwrap_or(i32::MAX)
}

/// Sweeps once around the hue wheel across the covered units.
#[derive(Debug, Clone, PartialEq)]
pub struct RainbowColorizer {
    reversed: bool,
    phase_offset: i32,
    position: i32,
    step: i32,
}

impl RainbowColorizer {
    /// `phase` shifts the starting hue by `phase / 10` of a turn.
    pub fn new(reversed: bool, phase: i32) -> Self {
        let turns = (f64::from(phase) / 10.0) % 1.0;
        let phase_offset = ((turns * f64::from(HUE_STEPS)) as i32) << PRECISION;
        RainbowColorizer {
            reversed,
            phase_offset,
            position: phase_offset,
            step: 0,
        }
    }
}

impl Colorizer for RainbowColorizer {
    fn init(&mut self, units: usize) {
        if units == 0 {
            self.step = 0;
            self.position = self.phase_offset;
            return;
        }
        let total = HUE_STEPS << PRECISION;
        self.step = total / units_as_i32(units);
        if self.reversed {
            self.step = -self.step;
            self.position = self.phase_offset.wrapping_add(total + self.step);
        } else {
            self.position = self.phase_offset;
        }
    }

    fn color(&self) -> TextColor {
        let index = (self.position >> PRECISION) & HUE_MASK;
        HUE_TABLE[index as usize]
    }

    fn advance(&mut self) {
        self.position = self.position.wrapping_add(self.step);
    }
}

/// Interpolates linearly through an ordered list of color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientColorizer {
    stops: Vec<TextColor>,
    phase_offset: i32,
    position: i32,
    step: i32,
}

impl GradientColorizer {
    /// A negative `phase` reverses the stops and starts at `1 + phase`.
    pub fn new(stops: &[TextColor], phase: f64) -> Self {
        let mut stops = stops.to_vec();
        let phase = if phase < 0.0 {
            stops.reverse();
            1.0 + phase
        } else {
            phase
        };
        let segments = stops.len().saturating_sub(1).min(MAX_SEGMENTS as usize) as f64;
        let phase_offset = (phase * segments * f64::from(SCALE)) as i32;
        GradientColorizer {
            stops,
            phase_offset,
            position: phase_offset,
            step: 0,
        }
    }

    fn segments(&self) -> i32 {
        units_as_i32(self.stops.len().saturating_sub(1)).min(MAX_SEGMENTS)
    }
}

impl Colorizer for GradientColorizer {
    fn init(&mut self, units: usize) {
        self.position = self.phase_offset;
        if units <= 1 {
            self.step = 0;
            return;
        }
        let total = self.segments() << PRECISION;
        self.step = total / units_as_i32(units - 1);
    }

    fn color(&self) -> TextColor {
        let max = self.segments() << PRECISION;
        let clamped = self.position.clamp(0, max);
        let index = (clamped >> PRECISION) as usize;
        let fraction = clamped & MASK;

        if index + 1 >= self.stops.len() {
            return self.stops.last().copied().unwrap_or_default();
        }

        let from = self.stops[index].value() as i32;
        let to = self.stops[index + 1].value() as i32;
        let channel = |shift: i32| -> u32 {
            let a = (from >> shift) & 0xff;
            let b = (to >> shift) & 0xff;
            ((a * (SCALE - fraction) + b * fraction) >> PRECISION) as u32
        };
        TextColor::new((channel(16) << 16) | (channel(8) << 8) | channel(0))
    }

    fn advance(&mut self) {
        self.position = self.position.wrapping_add(self.step);
    }
}

/// The closed set of colorizers a color scope can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyColorizer {
    Rainbow(RainbowColorizer),
    Gradient(GradientColorizer),
}

impl Colorizer for AnyColorizer {
    fn init(&mut self, units: usize) {
        match self {
            AnyColorizer::Rainbow(inner) => inner.init(units),
            AnyColorizer::Gradient(inner) => inner.init(units),
        }
    }

    fn color(&self) -> TextColor {
        match self {
            AnyColorizer::Rainbow(inner) => inner.color(),
            AnyColorizer::Gradient(inner) => inner.color(),
        }
    }

    fn advance(&mut self) {
        match self {
            AnyColorizer::Rainbow(inner) => inner.advance(),
            AnyColorizer::Gradient(inner) => inner.advance(),
        }
    }
}

impl From<RainbowColorizer> for AnyColorizer {
    fn from(value: RainbowColorizer) -> Self {
        AnyColorizer::Rainbow(value)
    }
}

impl From<GradientColorizer> for AnyColorizer {
    fn from(value: GradientColorizer) -> Self {
        AnyColorizer::Gradient(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(colorizer: &mut impl Colorizer, units: usize) -> Vec<TextColor> {
        colorizer.init(units);
        (0..units)
            .map(|_| {
                let color = colorizer.color();
                colorizer.advance();
                color
            })
            .collect()
    }

    #[test]
    fn gradient_endpoints_are_exact() {
        let red = TextColor::new(0xff0000);
        let green = TextColor::new(0x00ff00);
        let mut gradient = GradientColorizer::new(&[red, green], 0.0);
        assert_eq!(sample(&mut gradient, 2), vec![red, green]);
        let five = sample(&mut gradient, 5);
        assert_eq!(five[0], red);
        assert_eq!(five[4], green);
    }

    #[test]
    fn gradient_midpoint_interpolates() {
        let mut gradient = GradientColorizer::new(&[TextColor::WHITE, TextColor::BLACK], 0.0);
        let colors = sample(&mut gradient, 3);
        assert_eq!(colors[1], TextColor::new(0x7f7f7f));
    }

    #[test]
    fn negative_phase_reverses_stops() {
        let red = TextColor::new(0xff0000);
        let blue = TextColor::new(0x0000ff);
        let mut gradient = GradientColorizer::new(&[red, blue], -1.0);
        assert_eq!(sample(&mut gradient, 2), vec![blue, red]);
    }

    #[test]
    fn single_unit_gradient_uses_first_stop() {
        let red = TextColor::new(0xff0000);
        let mut gradient = GradientColorizer::new(&[red, TextColor::WHITE], 0.0);
        assert_eq!(sample(&mut gradient, 1), vec![red]);
    }

    #[test]
    fn rainbow_starts_red_and_sweeps() {
        let mut rainbow = RainbowColorizer::new(false, 0);
        let colors = sample(&mut rainbow, 4);
        assert_eq!(colors[0], TextColor::new(0xff0000));
        assert_eq!(colors[0], HUE_TABLE[0]);
        assert_eq!(colors[1], HUE_TABLE[64]);
        assert_eq!(colors[2], HUE_TABLE[128]);
        assert_eq!(colors[3], HUE_TABLE[192]);
    }

    #[test]
    fn reversed_rainbow_walks_backwards() {
        let mut rainbow = RainbowColorizer::new(true, 0);
        let colors = sample(&mut rainbow, 4);
        assert_eq!(colors[0], HUE_TABLE[192]);
        assert_eq!(colors[3], HUE_TABLE[0]);
    }

    #[test]
    fn rainbow_phase_shifts_start() {
        let mut rainbow = RainbowColorizer::new(false, 5);
        rainbow.init(1);
        assert_eq!(rainbow.color(), HUE_TABLE[128]);
        let mut negative = RainbowColorizer::new(false, -5);
        negative.init(1);
        assert_eq!(negative.color(), HUE_TABLE[128]);
    }

    #[test]
    fn zero_units_do_not_panic() {
        let mut rainbow = RainbowColorizer::new(true, 3);
        rainbow.init(0);
        let _ = rainbow.color();
        let mut gradient = GradientColorizer::new(&[TextColor::WHITE, TextColor::BLACK], 0.5);
        gradient.init(0);
        let _ = gradient.color();
    }

    #[test]
    fn oversized_stop_list_stays_in_range() {
        let mut stops = vec![TextColor::BLACK; MAX_GRADIENT_STOPS + 10];
        stops.push(TextColor::WHITE);
        let mut gradient = GradientColorizer::new(&stops, 0.5);
        let colors = sample(&mut gradient, 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], TextColor::BLACK);
    }
}
