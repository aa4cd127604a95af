//! Filter engine state types

use std::borrow::Cow;

use crate::{filter::FilterNode, tokens::JsonToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    pub(super) fn of(token: &JsonToken<'_>) -> Option<Self> {
        match token {
            JsonToken::StartObject => Some(ContainerKind::Object),
            JsonToken::StartArray => Some(ContainerKind::Array),
            _ => None,
        }
    }

    pub(super) fn start_token<'a>(self) -> JsonToken<'a> {
        match self {
            ContainerKind::Object => JsonToken::StartObject,
            ContainerKind::Array => JsonToken::StartArray,
        }
    }

    pub(super) fn end_token<'a>(self) -> JsonToken<'a> {
        match self {
            ContainerKind::Object => JsonToken::EndObject,
            ContainerKind::Array => JsonToken::EndArray,
        }
    }
}

/// What the next value inside an object frame is filtered by
#[derive(Debug)]
pub(super) enum Pending<'f, 'a> {
    None,
    /// Property did not match, the whole value is dropped
    Skip,
    /// Property matched, value is evaluated under `filter`
    Field {
        name: Cow<'a, str>,
        filter: &'f FilterNode,
    },
}

/// One open object or array that is not being skipped
#[derive(Debug)]
pub(super) struct Frame<'f, 'a> {
    pub(super) kind: ContainerKind,
    /// Filter applying to the members of this container
    pub(super) filter: &'f FilterNode,
    /// Whether the start token (and property name) has been output
    pub(super) emitted: bool,
    /// Property name in the parent object, held until the frame is emitted
    pub(super) field_name: Option<Cow<'a, str>>,
    pub(super) pending: Pending<'f, 'a>,
}

impl<'f, 'a> Frame<'f, 'a> {
    pub(super) fn new(
        kind: ContainerKind,
        filter: &'f FilterNode,
        emitted: bool,
        field_name: Option<Cow<'a, str>>,
    ) -> Self {
        Self {
            kind,
            filter,
            emitted,
            field_name,
            pending: Pending::None,
        }
    }
}
