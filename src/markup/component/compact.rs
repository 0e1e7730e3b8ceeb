//! Folding and compaction of component lists.

use super::node::{Component, Content};
use super::style::{Decoration, Style};
use once_cell::sync::Lazy;

/// Leading marker placed before an unstyled wrapper so the wrapper's
/// children do not inherit italics when the result is merged into a parent.
static COMPACT_SENTINEL: Lazy<Component> =
    Lazy::new(|| Component::styled_text("", Style::with_decoration(Decoration::Italic, false)));

pub fn compact_sentinel() -> Component {
    COMPACT_SENTINEL.clone()
}

/// Folds a list of siblings into a single component.
///
/// No children give an empty component and a single child is returned as
/// is, except for an unstyled empty-text wrapper which gets the compaction
/// sentinel inserted ahead of it.
pub fn combine(mut children: Vec<Component>) -> Component {
    match children.len() {
        0 => Component::empty(),
        1 => {
            let child = children.pop().unwrap_or_default();
            if is_bare_wrapper(&child) {
                Component::empty()
                    .append(compact_sentinel())
                    .append(child)
            } else {
                child
            }
        }
        _ => Component::empty().with_children(children),
    }
}

fn is_bare_wrapper(component: &Component) -> bool {
    component.as_text() == Some("") && !component.children.is_empty() && component.style.is_empty()
}

/// Collapses an empty-text wrapper with exactly one child into that child,
/// filling the child's unset style fields from the wrapper.
pub fn compact_child(component: Component) -> Component {
    if component.as_text() != Some("") || component.children.len() != 1 {
        return component;
    }
    let Component {
        style: wrapper_style,
        mut children,
        ..
    } = component;
    let mut child = children.pop().unwrap_or_default();
    child.style.merge_if_absent(&wrapper_style);
    child
}

/// Recursively simplifies a tree without changing how it renders.
///
/// - empty, unstyled, childless text children are dropped;
/// - adjacent childless text siblings with equal styles are joined;
/// - an empty-text wrapper with one child is replaced by that child when
///   the wrapper's style can be merged without overriding the child.
pub fn compact(component: Component) -> Component {
    let Component {
        content,
        style,
        children,
    } = component;

    let mut compacted: Vec<Component> = Vec::with_capacity(children.len());
    for child in children.into_iter().map(compact) {
        if child.is_empty() {
            continue;
        }
        if let Some(previous) = compacted.last_mut() {
            if let (Content::Text(prev), Content::Text(next)) = (&mut previous.content, &child.content) {
                if previous.children.is_empty() && child.children.is_empty() && previous.style == child.style {
                    prev.push_str(next);
                    continue;
                }
            }
        }
        compacted.push(child);
    }

    let mut result = Component {
        content,
        style,
        children: compacted,
    };

    if result.as_text() == Some("") && result.children.len() == 1 && can_merge(&result.style, &result.children[0].style) {
        result = compact_child(result);
    }
    result
}

/// A wrapper style merges into a child when no field set on both differs.
fn can_merge(wrapper: &Style, child: &Style) -> bool {
    let mut merged = child.clone();
    merged.merge_if_absent(wrapper);
    let mut reverse = wrapper.clone();
    reverse.merge_if_absent(child);
    merged == reverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::component::TextColor;

    #[test]
    fn combine_handles_sizes() {
        assert!(combine(Vec::new()).is_empty());
        assert_eq!(combine(vec![Component::text("a")]), Component::text("a"));
        let two = combine(vec![Component::text("a"), Component::text("b")]);
        assert_eq!(two.as_text(), Some(""));
        assert_eq!(two.children.len(), 2);
    }

    #[test]
    fn combine_guards_bare_wrapper() {
        let wrapper = Component::empty().append(Component::text("a"));
        let combined = combine(vec![wrapper.clone()]);
        assert_eq!(combined.children, vec![compact_sentinel(), wrapper]);
    }

    #[test]
    fn compact_child_merges_style() {
        let red = Style::with_color(TextColor::new(0xff0000));
        let wrapper = Component::styled_text("", red)
            .append(Component::styled_text("x", Style::with_decoration(Decoration::Bold, true)));
        let child = compact_child(wrapper);
        assert_eq!(child.as_text(), Some("x"));
        assert_eq!(child.style.color, Some(TextColor::new(0xff0000)));
        assert_eq!(child.style.decoration(Decoration::Bold), Some(true));
    }

    #[test]
    fn compact_joins_and_drops() {
        let tree = Component::empty()
            .append(Component::text("a"))
            .append(Component::empty())
            .append(Component::text("b"))
            .append(Component::styled_text("c", Style::with_decoration(Decoration::Bold, true)));
        let compacted = compact(tree);
        assert_eq!(compacted.children.len(), 2);
        assert_eq!(compacted.children[0].as_text(), Some("ab"));
        assert_eq!(compacted.children[1].as_text(), Some("c"));
    }

    #[test]
    fn compact_keeps_conflicting_wrapper() {
        let red = Style::with_color(TextColor::new(0xff0000));
        let blue = Style::with_color(TextColor::new(0x0000ff));
        let tree = Component::styled_text("", red).append(Component::styled_text("x", blue));
        let compacted = compact(tree.clone());
        assert_eq!(compacted, tree);
    }
}
