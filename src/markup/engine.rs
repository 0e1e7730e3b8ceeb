//! Parser entry points.
//!
//! The free functions parse with no custom tags and the default
//! configuration. [`MarkupParser`] bundles resolvers, a data resolver, a
//! locale and a configuration for repeated use; it holds no per-parse state
//! and can be shared between threads.

use super::component::Component;
use super::config::ParserConfig;
use super::parsing::Parser;
use super::resolver::{
    Addressee, ContextError, DataComponentResolver, EmptyResolver, Tag, TagContext, TagResolver,
};
use std::fmt;

type SharedResolver = Box<dyn TagResolver + Send + Sync>;
type SharedDataResolver = Box<dyn DataComponentResolver + Send + Sync>;

static DEFAULT_CONFIG: ParserConfig = ParserConfig::DEFAULT;

/// Parses markup using only the built-in tags.
pub fn deserialize(input: &str) -> Component {
    deserialize_with(input, &EmptyResolver)
}

/// Parses markup, consulting `resolver` before the built-in tags.
pub fn deserialize_with(input: &str, resolver: &dyn TagResolver) -> Component {
    parse_in(input, TagContext::new(resolver, &DEFAULT_CONFIG))
}

/// Parses `input` under an existing context.
pub(crate) fn parse_in(input: &str, context: TagContext<'_>) -> Component {
    if input.is_empty() {
        return Component::empty();
    }
    if !input.contains(['<', '\\']) {
        return Component::text(input);
    }
    Parser::new(context).parse(input)
}

/// A reusable parser configuration.
pub struct MarkupParser {
    resolvers: Vec<SharedResolver>,
    data_resolver: Option<SharedDataResolver>,
    locale: Option<String>,
    config: ParserConfig,
}

impl MarkupParser {
    /// A parser with no custom tags and the default configuration.
    pub fn new() -> Self {
        MarkupParser {
            resolvers: Vec::new(),
            data_resolver: None,
            locale: None,
            config: ParserConfig::default(),
        }
    }

    pub fn builder() -> MarkupParserBuilder {
        MarkupParserBuilder::default()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn deserialize(&self, input: &str) -> Component {
        parse_in(input, self.context(&self.resolvers))
    }

    /// Parses with `extra` consulted ahead of the registered resolvers.
    pub fn deserialize_with(&self, input: &str, extra: &dyn TagResolver) -> Component {
        let layered = Layered {
            first: extra,
            rest: &self.resolvers,
        };
        parse_in(input, self.context(&layered))
    }

    /// Parses for a specific addressee, which resolvers can inspect.
    ///
    /// Fails when this parser has an explicit locale and the addressee
    /// reports one too.
    pub fn deserialize_for(
        &self,
        input: &str,
        addressee: &dyn Addressee,
    ) -> Result<Component, ContextError> {
        if self.locale.is_some() && addressee.locale().is_some() {
            return Err(ContextError::ConflictingLocale);
        }
        let context = self.context(&self.resolvers).with_addressee(addressee);
        Ok(parse_in(input, context))
    }

    fn context<'s>(&'s self, resolver: &'s dyn TagResolver) -> TagContext<'s> {
        let mut context = TagContext::new(resolver, &self.config);
        if let Some(data_resolver) = &self.data_resolver {
            context = context.with_data_resolver(data_resolver.as_ref());
        }
        if let Some(locale) = &self.locale {
            context = context.with_locale(locale);
        }
        context
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkupParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupParser")
            .field("resolvers", &self.resolvers.len())
            .field("has_data_resolver", &self.data_resolver.is_some())
            .field("locale", &self.locale)
            .field("config", &self.config)
            .finish()
    }
}

/// A per-call resolver in front of the registered ones.
struct Layered<'r> {
    first: &'r dyn TagResolver,
    rest: &'r dyn TagResolver,
}

impl TagResolver for Layered<'_> {
    fn has(&self, name: &str) -> bool {
        self.first.has(name) || self.rest.has(name)
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        if self.first.has(name) {
            if let Some(tag) = self.first.resolve(name, args, context) {
                return Some(tag);
            }
        }
        if self.rest.has(name) {
            return self.rest.resolve(name, args, context);
        }
        None
    }
}

/// Collects the parts of a [`MarkupParser`].
///
/// Resolvers accumulate in registration order. The data resolver, locale and
/// configuration may each be given once; a second value makes
/// [`build`](MarkupParserBuilder::build) fail.
#[derive(Default)]
pub struct MarkupParserBuilder {
    resolvers: Vec<SharedResolver>,
    data_resolver: Option<SharedDataResolver>,
    locale: Option<String>,
    config: Option<ParserConfig>,
    error: Option<ContextError>,
}

impl MarkupParserBuilder {
    pub fn resolver(mut self, resolver: impl TagResolver + Send + Sync + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn data_resolver(
        mut self,
        resolver: impl DataComponentResolver + Send + Sync + 'static,
    ) -> Self {
        if self.data_resolver.is_some() {
            self.fail("data_resolver");
        }
        self.data_resolver = Some(Box::new(resolver));
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        if self.locale.is_some() {
            self.fail("locale");
        }
        self.locale = Some(locale.into());
        self
    }

    pub fn config(mut self, config: ParserConfig) -> Self {
        if self.config.is_some() {
            self.fail("config");
        }
        self.config = Some(config);
        self
    }

    /// Keeps the first misuse only.
    fn fail(&mut self, attribute: &'static str) {
        self.error
            .get_or_insert(ContextError::DuplicateAttribute(attribute));
    }

    pub fn build(self) -> Result<MarkupParser, ContextError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(MarkupParser {
            resolvers: self.resolvers,
            data_resolver: self.data_resolver,
            locale: self.locale,
            config: self.config.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::resolver::{ArgumentTagResolver, RawDataResolver};
    use std::any::Any;

    #[test]
    fn fast_paths() {
        assert_eq!(deserialize(""), Component::empty());
        assert_eq!(deserialize("plain > text"), Component::text("plain > text"));
    }

    #[test]
    fn builder_rejects_duplicates() {
        let result = MarkupParser::builder().locale("en_us").locale("de_de").build();
        assert_eq!(result.err(), Some(ContextError::DuplicateAttribute("locale")));

        let result = MarkupParser::builder()
            .data_resolver(RawDataResolver)
            .data_resolver(RawDataResolver)
            .config(ParserConfig::default())
            .config(ParserConfig::default())
            .build();
        assert_eq!(result.err(), Some(ContextError::DuplicateAttribute("data_resolver")));
    }

    struct Viewer(Option<&'static str>);

    impl Addressee for Viewer {
        fn locale(&self) -> Option<&str> {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn conflicting_locale_is_an_error() {
        let parser = MarkupParser::builder().locale("en_us").build().unwrap();
        assert_eq!(
            parser.deserialize_for("x", &Viewer(Some("fr_fr"))),
            Err(ContextError::ConflictingLocale)
        );
        assert_eq!(
            parser.deserialize_for("x", &Viewer(None)),
            Ok(Component::text("x"))
        );
    }

    #[test]
    fn per_call_resolver_goes_first() {
        let parser = MarkupParser::builder()
            .resolver(ArgumentTagResolver::new(vec![Tag::preprocess("registered")]))
            .build()
            .unwrap();
        assert_eq!(parser.deserialize("<arg:0>"), Component::text("registered"));
        let extra = ArgumentTagResolver::new(vec![Tag::preprocess("per call")]);
        assert_eq!(
            parser.deserialize_with("<arg:0>", &extra),
            Component::text("per call")
        );
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkupParser>();
    }
}
