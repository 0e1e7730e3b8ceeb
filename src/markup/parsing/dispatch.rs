//! Tag dispatch.
//!
//! Custom resolvers are asked first, under the name as written (lowercased,
//! negation stripped). Built-in tags are matched after alias normalization;
//! a name that matches nothing may still be a color name or `#RRGGBB`.

use super::arguments;
use super::frames::FrameKind;
use super::parser::Parser;
use crate::markup::color::{self, AnyColorizer};
use crate::markup::component::{Component, Decoration, Key, Style};
use crate::markup::lexing::TagToken;
use crate::markup::resolver::Tag;

/// Maps shorthand tag names to their canonical form.
pub fn normalize_tag_name(name: &str) -> &str {
    match name {
        "colour" | "c" => "color",
        "b" => "bold",
        "em" | "i" => "italic",
        "u" => "underlined",
        "st" => "strikethrough",
        "obf" => "obfuscated",
        "br" => "newline",
        "sel" => "selector",
        "tr" | "translate" => "lang",
        "tr_or" | "translate_or" => "lang_or",
        "data" => "nbt",
        "keybind" => "key",
        "insertion" => "insert",
        _ => name,
    }
}

/// What a built-in tag does once its arguments check out.
enum Action {
    Reset,
    /// Appended where the tag stands. Never opens a scope.
    Leaf(Component),
    Style(Style),
    /// Opens a color scope; self-closing color tags do nothing.
    Color(AnyColorizer),
}

impl<'a> Parser<'a> {
    /// Dispatches one tag. `false` means the tag is kept as literal text.
    pub(super) fn handle_tag(&mut self, token: &TagToken) -> bool {
        if token.closing {
            return self.close_tag(&token.name);
        }
        let (name, negated) = match token.name.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (token.name.as_str(), false),
        };

        if let Some(tag) = self.resolve_custom(name, &token.args) {
            return self.handle_custom_tag(name, tag, token.self_closing);
        }

        let name = normalize_tag_name(name);
        let Some(action) = self.builtin(name, &token.args, negated) else {
            return false;
        };
        match action {
            Action::Reset => {
                self.reset();
                true
            }
            Action::Leaf(component) => {
                self.push_node(component);
                true
            }
            Action::Style(style) => self.open_style(name, style, token.self_closing),
            Action::Color(_) if token.self_closing => true,
            Action::Color(colorizer) => self.push_frame(name, FrameKind::Color(colorizer)),
        }
    }

    fn builtin(&self, name: &str, args: &[String], negated: bool) -> Option<Action> {
        let context = &self.context;
        let action = match name {
            "reset" => Action::Reset,
            "newline" => Action::Leaf(Component::newline()),
            "selector" => Action::Leaf(arguments::parse_selector(args, context)?),
            "score" => Action::Leaf(arguments::parse_score(args)?),
            "nbt" => Action::Leaf(arguments::parse_nbt(args, context)?),
            "key" => Action::Leaf(arguments::parse_keybind(args)?),
            "lang" => Action::Leaf(arguments::parse_translatable(args, None, context)?),
            "lang_or" => {
                let fallback = args.get(1).map(String::as_str);
                Action::Leaf(arguments::parse_translatable(args, fallback, context)?)
            }
            "sprite" => Action::Leaf(arguments::parse_sprite(args)?),
            "head" => Action::Leaf(arguments::parse_head(args)?),
            "color" => Action::Style(Style::with_color(color::parse_text_color(args.first()?)?)),
            "shadow" => {
                let alpha = context.config().default_shadow_alpha;
                Action::Style(Style::with_shadow(arguments::parse_shadow(args, negated, alpha)?))
            }
            "font" => Action::Style(Style::with_font(Key::parse(args.first()?)?)),
            "click" => Action::Style(Style::with_click(arguments::parse_click(args)?)),
            "hover" => Action::Style(Style::with_hover(arguments::parse_hover(args, context)?)),
            "insert" => Action::Style(Style::with_insertion(args.first()?.as_str())),
            "bold" | "italic" | "underlined" | "strikethrough" | "obfuscated" => {
                let decoration = Decoration::from_name(name)?;
                let disabled = negated
                    || args
                        .first()
                        .is_some_and(|state| state.eq_ignore_ascii_case("false"));
                Action::Style(Style::with_decoration(decoration, !disabled))
            }
            "rainbow" => Action::Color(color::parse_rainbow(args)?),
            "gradient" => Action::Color(color::parse_gradient(args)?),
            "transition" => Action::Style(Style::with_color(color::parse_transition(args)?)),
            "pride" => Action::Color(color::parse_pride(args)?),
            _ => Action::Style(Style::with_color(color::parse_text_color(name)?)),
        };
        Some(action)
    }

    /// Opens a style scope, or emits an empty styled leaf for a self-closing tag.
    fn open_style(&mut self, name: &str, style: Style, self_closing: bool) -> bool {
        if self_closing {
            self.push_node(Component::styled_text("", style));
            return true;
        }
        self.push_frame(name, FrameKind::Style(style))
    }

    /// Closes by the name as written, then by its canonical form.
    fn close_tag(&mut self, name: &str) -> bool {
        if self.try_close(name) {
            return true;
        }
        let normalized = normalize_tag_name(name);
        normalized != name && self.try_close(normalized)
    }

    fn resolve_custom(&self, name: &str, args: &[String]) -> Option<Tag> {
        let resolver = self.context.resolver();
        if !resolver.has(name) {
            return None;
        }
        let tag = resolver.resolve(name, args, &self.context);
        log::debug!(target: "quickmm.resolver", "<{}> resolved to {:?}", name, tag);
        tag
    }

    fn handle_custom_tag(&mut self, name: &str, tag: Tag, self_closing: bool) -> bool {
        match tag {
            Tag::PreProcess(markup) => {
                if self.preprocess_depth >= self.context.config().max_depth {
                    log::debug!(target: "quickmm.resolver", "pre-process limit reached at <{}>", name);
                    return false;
                }
                self.preprocess_depth += 1;
                self.parse_segment(&markup);
                self.preprocess_depth -= 1;
                true
            }
            Tag::Styling(style) => self.open_style(name, style, self_closing),
            Tag::Inserting {
                component,
                allows_children,
            } => {
                if !self_closing && allows_children {
                    self.push_frame(name, FrameKind::Insert(component))
                } else {
                    self.push_node(component);
                    true
                }
            }
        }
    }
}
