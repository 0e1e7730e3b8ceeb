//! Custom tag resolution
//!
//!     The parser consults a [TagResolver] before its built-in table, so a registered name
//!     shadows a built-in one. Resolvers are passed explicitly into each parse through a
//!     [TagContext]; there is no global registry.
//!
//!     Slices, vectors, boxes and references of resolvers are resolvers themselves. A
//!     composed resolver asks its members in order and the first member that declares the
//!     name and returns a tag wins.

pub mod argument;
pub mod context;
pub mod data;

pub use argument::ArgumentTagResolver;
pub use context::{Addressee, ContextError, TagContext};
pub use data::{DataComponentResolver, JsonDataResolver, RawDataResolver};

use crate::markup::component::{Component, Style};

/// What a custom tag expands to.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Markup fed back to the reader in place of the tag.
    PreProcess(String),
    /// Opens a scope with this style, or emits an empty styled leaf when self-closing.
    Styling(Style),
    /// Emits a fixed component. With `allows_children` an open tag scopes the
    /// following content as children of that component.
    Inserting {
        component: Component,
        allows_children: bool,
    },
}

impl Tag {
    pub fn preprocess(markup: impl Into<String>) -> Self {
        Tag::PreProcess(markup.into())
    }

    pub fn styling(style: Style) -> Self {
        Tag::Styling(style)
    }

    /// An inserting tag that accepts children.
    pub fn inserting(component: Component) -> Self {
        Tag::Inserting {
            component,
            allows_children: true,
        }
    }

    /// An inserting tag whose body, if any, is left to the enclosing scope.
    pub fn self_closing_inserting(component: Component) -> Self {
        Tag::Inserting {
            component,
            allows_children: false,
        }
    }
}

pub trait TagResolver {
    /// Whether this resolver claims `name`. Names arrive lowercased and
    /// without a negation prefix.
    fn has(&self, name: &str) -> bool;

    /// Resolves a claimed name. `None` lets the tag fall through as literal text.
    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag>;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyResolver;

impl TagResolver for EmptyResolver {
    fn has(&self, _name: &str) -> bool {
        false
    }

    fn resolve(&self, _name: &str, _args: &[String], _context: &TagContext<'_>) -> Option<Tag> {
        None
    }
}

impl<R: TagResolver> TagResolver for [R] {
    fn has(&self, name: &str) -> bool {
        self.iter().any(|resolver| resolver.has(name))
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        self.iter()
            .filter(|resolver| resolver.has(name))
            .find_map(|resolver| resolver.resolve(name, args, context))
    }
}

impl<R: TagResolver> TagResolver for Vec<R> {
    fn has(&self, name: &str) -> bool {
        self.as_slice().has(name)
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        self.as_slice().resolve(name, args, context)
    }
}

impl<R: TagResolver + ?Sized> TagResolver for Box<R> {
    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        (**self).resolve(name, args, context)
    }
}

impl<R: TagResolver + ?Sized> TagResolver for &R {
    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        (**self).resolve(name, args, context)
    }
}
