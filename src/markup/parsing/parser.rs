//! The scope stack driver.
//!
//! The source is lexed into plain runs, escapes and tag openers. Text is
//! buffered and flushed into the top frame whenever a tag is dispatched. A
//! tag the dispatcher rejects is put back into the buffer exactly as written.

use super::frames::{Frame, FrameKind};
use crate::markup::component::Component;
use crate::markup::lexing::{read_tag, Lexeme};
use crate::markup::resolver::TagContext;
use logos::Logos;

pub(crate) struct Parser<'a> {
    pub(super) context: TagContext<'a>,
    pub(super) frames: Vec<Frame>,
    text: String,
    pub(super) preprocess_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(context: TagContext<'a>) -> Self {
        let mut frames = Vec::with_capacity(8);
        frames.push(Frame::root());
        Parser {
            context,
            frames,
            text: String::with_capacity(64),
            preprocess_depth: 0,
        }
    }

    /// Parses `input` to completion, closing any scope left open.
    pub fn parse(mut self, input: &str) -> Component {
        self.parse_segment(input);
        self.flush_text();
        self.reset();
        match self.frames.pop() {
            Some(root) => root.build(),
            None => Component::empty(),
        }
    }

    pub(super) fn parse_segment(&mut self, source: &str) {
        let mut lexer = Lexeme::lexer(source);
        while let Some(lexeme) = lexer.next() {
            let lexeme = match lexeme {
                Ok(lexeme) => lexeme,
                Err(()) => {
                    self.text.push_str(lexer.slice());
                    continue;
                }
            };
            if let Some(ch) = lexeme.unescaped() {
                self.text.push(ch);
                continue;
            }
            if lexeme == Lexeme::Text {
                self.text.push_str(lexer.slice());
                continue;
            }

            let start = lexer.span().start;
            let Some(token) = read_tag(source, start) else {
                self.text.push('<');
                continue;
            };
            self.flush_text();
            if !self.handle_tag(&token) {
                log::debug!(target: "quickmm.parser", "unresolved tag {}", token.raw(source));
                self.text.push_str(token.raw(source));
            }
            lexer.bump(token.end() - lexer.span().end);
        }
    }

    pub(super) fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        self.top().push_text(text);
    }

    pub(super) fn top(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub(super) fn push_node(&mut self, node: Component) {
        self.top().push_node(node);
    }

    /// Opens a scope. Refused past the configured depth.
    pub(super) fn push_frame(&mut self, name: &str, kind: FrameKind) -> bool {
        if self.frames.len() > self.context.config().max_depth {
            log::debug!(target: "quickmm.parser", "scope limit reached at <{}>", name);
            return false;
        }
        log::trace!(target: "quickmm.parser", "open <{}>", name);
        self.frames.push(Frame::new(name, kind));
        true
    }

    pub(super) fn close_top(&mut self) {
        if self.frames.len() <= 1 {
            return;
        }
        if let Some(frame) = self.frames.pop() {
            log::trace!(target: "quickmm.parser", "close <{}>", frame.tag_name.as_deref().unwrap_or(""));
            let node = frame.build();
            self.push_node(node);
        }
    }

    /// Closes the innermost scope named `name` and every scope above it.
    pub(super) fn try_close(&mut self, name: &str) -> bool {
        let Some(index) = self.frames[1..].iter().rposition(|frame| frame.closes_on(name)) else {
            return false;
        };
        let index = index + 1;
        while self.frames.len() > index {
            self.close_top();
        }
        true
    }

    /// Closes every scope down to the root.
    pub(super) fn reset(&mut self) {
        while self.frames.len() > 1 {
            self.close_top();
        }
    }
}
