//! Argument parsing for the color tag family.

use super::colorizer::{AnyColorizer, GradientColorizer, RainbowColorizer, MAX_GRADIENT_STOPS};
use super::palettes::{palette, DEFAULT_PALETTE};
use super::transition::transition_color;
use crate::markup::component::TextColor;

/// Stops used by `<gradient>` and `<transition>` without color arguments.
pub const DEFAULT_GRADIENT: [TextColor; 2] = [TextColor::WHITE, TextColor::BLACK];

/// Parsed `color... [phase]` argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorList {
    pub colors: Vec<TextColor>,
    pub phase: f64,
}

/// Parses a color name (ASCII case-insensitive), a `grey` alias or `#RRGGBB`.
pub fn parse_text_color(value: &str) -> Option<TextColor> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with('#') {
        return TextColor::from_hex(value);
    }
    TextColor::named(&value.to_ascii_lowercase())
}

fn parse_phase(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|phase| (-1.0..=1.0).contains(phase))
}

/// Parses zero or more colors followed by an optional trailing phase.
///
/// No arguments yields the default white-to-black stops. Exactly one color
/// is rejected, as is any non-color argument other than a final phase in
/// `[-1, 1]`, and so is a list longer than [`MAX_GRADIENT_STOPS`].
pub fn parse_color_list_with_phase(args: &[String]) -> Option<ColorList> {
    let mut colors = Vec::with_capacity(args.len());
    let mut phase = 0.0;
    for (index, value) in args.iter().enumerate() {
        if let Some(color) = parse_text_color(value) {
            colors.push(color);
            continue;
        }
        if index + 1 == args.len() {
            phase = parse_phase(value)?;
            break;
        }
        return None;
    }
    match colors.len() {
        0 => colors.extend_from_slice(&DEFAULT_GRADIENT),
        1 => return None,
        count if count > MAX_GRADIENT_STOPS => return None,
        _ => {}
    }
    Some(ColorList { colors, phase })
}

/// `<rainbow[:[!]phase]>`; a leading `!` reverses the sweep.
pub fn parse_rainbow(args: &[String]) -> Option<AnyColorizer> {
    let mut reversed = false;
    let mut phase = 0;
    if let Some(first) = args.first() {
        let mut value = first.as_str();
        if let Some(rest) = value.strip_prefix('!') {
            reversed = true;
            value = rest;
        }
        if !value.is_empty() {
            phase = value.parse::<i32>().ok()?;
        }
    }
    Some(RainbowColorizer::new(reversed, phase).into())
}

pub fn parse_gradient(args: &[String]) -> Option<AnyColorizer> {
    let list = parse_color_list_with_phase(args)?;
    Some(GradientColorizer::new(&list.colors, list.phase).into())
}

pub fn parse_transition(args: &[String]) -> Option<TextColor> {
    let list = parse_color_list_with_phase(args)?;
    Some(transition_color(&list.colors, list.phase))
}

/// `<pride[:palette][:phase]>` or `<pride:phase>`.
pub fn parse_pride(args: &[String]) -> Option<AnyColorizer> {
    let mut name = DEFAULT_PALETTE.to_string();
    let mut phase = 0.0;
    if let Some(first) = args.first() {
        let lower = first.to_ascii_lowercase();
        if palette(&lower).is_some() {
            name = lower;
            if let Some(value) = args.get(1) {
                phase = parse_phase(value)?;
            }
        } else if !lower.is_empty() {
            phase = parse_phase(&lower)?;
        }
    }
    let stops = palette(&name)?;
    Some(GradientColorizer::new(stops, phase).into())
}
