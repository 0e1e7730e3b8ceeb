//! Spreads a colorizer over a component tree.
//!
//! Measurement is in visual units: one per code point of text content and
//! one per non-text component. Subtrees that already carry a color are left
//! untouched but still consume their units, so the colors around them stay
//! where they would have been.

use super::colorizer::Colorizer;
use crate::markup::component::{Component, Content, Style};

/// Counts the visual units of a tree.
pub fn size_of(component: &Component) -> usize {
    let own = match &component.content {
        Content::Text(text) => text.chars().count(),
        _ => 1,
    };
    own + component.children.iter().map(size_of).sum::<usize>()
}

/// Recolors `component`, splitting uncolored text into one leaf per code point.
pub fn apply(component: Component, colorizer: &mut impl Colorizer) -> Component {
    if component.style.color.is_some() {
        colorizer.advance_by(size_of(&component));
        return component;
    }
    match component {
        Component {
            content: Content::Text(text),
            style,
            children,
        } => apply_to_text(text, style, children, colorizer),
        other => apply_to_other(other, colorizer),
    }
}

fn apply_to_text(
    text: String,
    style: Style,
    children: Vec<Component>,
    colorizer: &mut impl Colorizer,
) -> Component {
    if text.is_empty() && children.is_empty() {
        return Component::text(text).with_style(style);
    }

    let mut parts = Vec::with_capacity(text.len() + children.len());
    for ch in text.chars() {
        parts.push(Component::text(ch).color_if_absent(colorizer.color()));
        colorizer.advance();
    }
    for child in children {
        parts.push(apply(child, colorizer));
    }
    Component::empty().with_style(style).with_children(parts)
}

fn apply_to_other(component: Component, colorizer: &mut impl Colorizer) -> Component {
    let mut colored = component.color_if_absent(colorizer.color());
    colorizer.advance();
    let children = std::mem::take(&mut colored.children);
    colored.children = children
        .into_iter()
        .map(|child| apply(child, colorizer))
        .collect();
    colored
}
