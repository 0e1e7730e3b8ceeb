//! Per-parse resolution context.

use super::{DataComponentResolver, TagResolver};
use crate::markup::component::Component;
use crate::markup::config::ParserConfig;
use crate::markup::engine;
use std::any::Any;
use std::fmt;

/// The party a message is rendered for.
///
/// The parser never inspects an addressee beyond its locale; resolvers can
/// recover the concrete type through [`Addressee::as_any`].
pub trait Addressee {
    fn locale(&self) -> Option<&str> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Errors raised for misuse of the resolution API.
///
/// Malformed markup is never an error; these only signal caller bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// A single-valued attribute was supplied more than once.
    DuplicateAttribute(&'static str),
    /// An explicit locale was configured and the addressee reports one as well.
    ConflictingLocale,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::DuplicateAttribute(name) => {
                write!(f, "Attribute '{}' was set more than once", name)
            }
            ContextError::ConflictingLocale => write!(
                f,
                "An explicit locale cannot be combined with an addressee that has its own locale"
            ),
        }
    }
}

impl std::error::Error for ContextError {}

/// Everything a resolver can see while a tag is being resolved.
///
/// The context is cheap to copy. [`TagContext::deserialize`] re-enters the
/// parser with the same resolvers one level deeper.
#[derive(Clone, Copy)]
pub struct TagContext<'a> {
    resolver: &'a dyn TagResolver,
    data_resolver: Option<&'a dyn DataComponentResolver>,
    locale: Option<&'a str>,
    addressee: Option<&'a dyn Addressee>,
    config: &'a ParserConfig,
    depth: usize,
}

impl<'a> TagContext<'a> {
    pub fn new(resolver: &'a dyn TagResolver, config: &'a ParserConfig) -> Self {
        TagContext {
            resolver,
            data_resolver: None,
            locale: None,
            addressee: None,
            config,
            depth: 0,
        }
    }

    pub fn with_data_resolver(mut self, data_resolver: &'a dyn DataComponentResolver) -> Self {
        self.data_resolver = Some(data_resolver);
        self
    }

    pub fn with_locale(mut self, locale: &'a str) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_addressee(mut self, addressee: &'a dyn Addressee) -> Self {
        self.addressee = Some(addressee);
        self
    }

    /// Parses nested markup with this context's resolvers.
    ///
    /// Past the configured depth the input is returned as literal text.
    pub fn deserialize(&self, input: &str) -> Component {
        match self.nested() {
            Some(nested) => engine::parse_in(input, nested),
            None => {
                log::debug!(
                    target: "quickmm.parser",
                    "nesting depth {} exceeded, keeping markup literal",
                    self.config.max_depth
                );
                Component::text(input)
            }
        }
    }

    /// The explicit locale, or else the addressee's.
    pub fn locale(&self) -> Option<&'a str> {
        self.locale
            .or_else(|| self.addressee.and_then(|addressee| addressee.locale()))
    }

    pub fn addressee(&self) -> Option<&'a dyn Addressee> {
        self.addressee
    }

    pub fn resolver(&self) -> &'a dyn TagResolver {
        self.resolver
    }

    pub fn data_resolver(&self) -> Option<&'a dyn DataComponentResolver> {
        self.data_resolver
    }

    pub fn config(&self) -> &'a ParserConfig {
        self.config
    }

    /// How many sub-parses enclose this one. Top-level parses are at 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn nested(&self) -> Option<TagContext<'a>> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            return None;
        }
        Some(TagContext { depth, ..*self })
    }
}

impl fmt::Debug for TagContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagContext")
            .field("locale", &self.locale())
            .field("has_addressee", &self.addressee.is_some())
            .field("has_data_resolver", &self.data_resolver.is_some())
            .field("depth", &self.depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::resolver::EmptyResolver;

    struct Player {
        locale: Option<&'static str>,
    }

    impl Addressee for Player {
        fn locale(&self) -> Option<&str> {
            self.locale
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn locale_prefers_explicit_value() {
        let config = ParserConfig::default();
        let player = Player {
            locale: Some("de_de"),
        };
        let context = TagContext::new(&EmptyResolver, &config).with_addressee(&player);
        assert_eq!(context.locale(), Some("de_de"));
        assert_eq!(context.with_locale("en_us").locale(), Some("en_us"));
        assert!(context
            .addressee()
            .and_then(|addressee| addressee.as_any().downcast_ref::<Player>())
            .is_some());
    }

    #[test]
    fn deserialize_stops_at_max_depth() {
        let config = ParserConfig {
            max_depth: 1,
            ..ParserConfig::default()
        };
        let context = TagContext::new(&EmptyResolver, &config);
        let parsed = context.deserialize("<red>x");
        assert!(parsed.style.color.is_some());
        assert_eq!(parsed.children, vec![Component::text("x")]);

        let nested = context.nested().unwrap();
        assert_eq!(nested.depth(), 1);
        assert_eq!(nested.deserialize("<red>x"), Component::text("<red>x"));
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            ContextError::DuplicateAttribute("locale").to_string(),
            "Attribute 'locale' was set more than once"
        );
    }
}
