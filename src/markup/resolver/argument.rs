//! Positional `<argument:N>` tags.

use super::{EmptyResolver, Tag, TagContext, TagResolver};

const NAMES: [&str; 2] = ["argument", "arg"];

/// Answers `<argument:N>` and `<arg:N>` from a list of tags and hands every
/// other name to `delegate`.
#[derive(Debug, Clone)]
pub struct ArgumentTagResolver<R = EmptyResolver> {
    arguments: Vec<Tag>,
    delegate: R,
}

impl ArgumentTagResolver {
    pub fn new(arguments: Vec<Tag>) -> Self {
        ArgumentTagResolver {
            arguments,
            delegate: EmptyResolver,
        }
    }
}

impl<R: TagResolver> ArgumentTagResolver<R> {
    pub fn with_delegate(arguments: Vec<Tag>, delegate: R) -> Self {
        ArgumentTagResolver {
            arguments,
            delegate,
        }
    }
}

impl<R: TagResolver> TagResolver for ArgumentTagResolver<R> {
    fn has(&self, name: &str) -> bool {
        NAMES.contains(&name) || self.delegate.has(name)
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        if NAMES.contains(&name) {
            let index: usize = args.first()?.parse().ok()?;
            return self.arguments.get(index).cloned();
        }
        if !self.delegate.has(name) {
            return None;
        }
        self.delegate.resolve(name, args, context)
    }
}
