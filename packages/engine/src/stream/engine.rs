//! Filtering iterator
//!
//! Inclusion rules, per token:
//! - a property name is looked up in the current object's filter; no match
//!   drops the property and its whole value
//! - array elements use the array's own filter, arrays are transparent
//! - below an `IncludeAll` node everything passes unchanged
//! - scalars at a branch node are dropped

use std::borrow::Cow;
use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::types::{ContainerKind, Frame, Pending};
use crate::{
    error::ExtractResult,
    filter::FilterNode,
    tokens::{JsonToken, TokenSource},
};

/// Token stream of `source` restricted to what `filter` includes
pub struct FilteringTokens<'f, 'a, S> {
    source: S,
    root: &'f FilterNode,
    frames: Vec<Frame<'f, 'a>>,
    /// Open containers inside the subtree currently being skipped
    skip_depth: usize,
    ready: VecDeque<JsonToken<'a>>,
    finished: bool,
}

impl<'f, 'a, S> FilteringTokens<'f, 'a, S>
where
    S: TokenSource<'a>,
{
    pub fn new(source: S, filter: &'f FilterNode) -> Self {
        Self {
            source,
            root: filter,
            frames: Vec::new(),
            skip_depth: 0,
            ready: VecDeque::new(),
            finished: false,
        }
    }

    /// Number of open containers that are not being skipped
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn process(&mut self, token: JsonToken<'a>) {
        if self.skip_depth > 0 {
            if token.is_container_start() {
                self.skip_depth += 1;
            } else if token.is_container_end() {
                self.skip_depth -= 1;
            }
            return;
        }

        let Some(top) = self.frames.last_mut() else {
            if token.is_scalar() || token.is_container_start() {
                self.process_value(token, self.root, None);
            }
            return;
        };

        if token.is_container_end() {
            self.close_frame();
            return;
        }

        let scope = top.filter;
        if scope.is_include_all() {
            if let Some(kind) = ContainerKind::of(&token) {
                self.frames.push(Frame::new(kind, scope, true, None));
            }
            self.ready.push_back(token);
            return;
        }

        if let JsonToken::FieldName(name) = token {
            top.pending = match scope.lookup_child(&name) {
                Some(filter) => Pending::Field { name, filter },
                None => Pending::Skip,
            };
            return;
        }

        let (filter, name) = match (top.kind, std::mem::replace(&mut top.pending, Pending::None)) {
            (ContainerKind::Array, _) => (scope, None),
            (ContainerKind::Object, Pending::Field { name, filter }) => (filter, Some(name)),
            (ContainerKind::Object, Pending::Skip | Pending::None) => {
                if token.is_container_start() {
                    self.skip_depth = 1;
                }
                return;
            }
        };
        self.process_value(token, filter, name);
    }

    /// Handle a value (scalar or container start) evaluated under `filter`
    fn process_value(
        &mut self,
        token: JsonToken<'a>,
        filter: &'f FilterNode,
        name: Option<Cow<'a, str>>,
    ) {
        let Some(kind) = ContainerKind::of(&token) else {
            if filter.includes_scalars() {
                self.emit_path();
                if let Some(name) = name {
                    self.ready.push_back(JsonToken::FieldName(name));
                }
                self.ready.push_back(token);
            }
            return;
        };

        if filter.is_include_nothing() {
            self.skip_depth = 1;
        } else if filter.is_include_all() {
            self.emit_path();
            if let Some(name) = name {
                self.ready.push_back(JsonToken::FieldName(name));
            }
            self.ready.push_back(token);
            self.frames.push(Frame::new(kind, filter, true, None));
        } else {
            self.frames.push(Frame::new(kind, filter, false, name));
        }
    }

    /// Output the held-back start tokens of every open frame
    fn emit_path(&mut self) {
        let Some(first) = self.frames.iter().position(|frame| !frame.emitted) else {
            return;
        };
        for frame in &mut self.frames[first..] {
            if let Some(name) = frame.field_name.take() {
                self.ready.push_back(JsonToken::FieldName(name));
            }
            self.ready.push_back(frame.kind.start_token());
            frame.emitted = true;
        }
    }

    fn close_frame(&mut self) {
        if let Some(frame) = self.frames.pop()
            && frame.emitted
        {
            self.ready.push_back(frame.kind.end_token());
        }
    }
}

impl<'a, S> Iterator for FilteringTokens<'_, 'a, S>
where
    S: TokenSource<'a>,
{
    type Item = ExtractResult<JsonToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }
            match self.source.next() {
                Some(Ok(token)) => self.process(token),
                Some(Err(error)) => {
                    self.finished = true;
                    tracing::debug!(
                        target: "jsonsift::stream",
                        error = %error,
                        depth = self.frames.len(),
                        "token source failed, ending filtered stream"
                    );
                    return Some(Err(error));
                }
                None => self.finished = true,
            }
        }
    }
}

impl<'a, S> FusedIterator for FilteringTokens<'_, 'a, S> where S: TokenSource<'a> {}
