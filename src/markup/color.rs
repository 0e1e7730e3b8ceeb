//! Color engine
//!
//!     Animated colors are produced by a [Colorizer](colorizer::Colorizer): a small state
//!     machine that is told how many visual units it covers and is then stepped once per
//!     unit. The rainbow sweeps the hue wheel through a precomputed table; the gradient
//!     interpolates between ordered stops. Both keep their position in 16.16 fixed point.
//!
//!     The [transform] module walks a finished subtree and hands every uncolored unit the
//!     next color, splitting text into one leaf per code point. The static `<transition>`
//!     color and the preset palettes used by `<pride>` live alongside.

pub mod args;
pub mod colorizer;
pub mod palettes;
pub mod transform;
pub mod transition;

pub use args::{
    parse_color_list_with_phase, parse_gradient, parse_pride, parse_rainbow, parse_text_color,
    parse_transition, ColorList, DEFAULT_GRADIENT,
};
pub use colorizer::{
    AnyColorizer, Colorizer, GradientColorizer, RainbowColorizer, MAX_GRADIENT_STOPS,
};
pub use palettes::{palette, palette_names, DEFAULT_PALETTE};
pub use transform::size_of;
pub use transition::transition_color;
