//! Wire representation of remote domain objects.
//!
//! # Responsibility
//! - Define the hypermedia types the server exposes: links, members and
//!   object representations.
//! - Provide the canonical snapshot type (`TObject`) held by display models.
//!
//! # Invariants
//! - The first link of a snapshot is treated as the primary resource address.
//! - `TObject::from_result` preserves every source field; the numeric
//!   instance id is stringified.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP verbs carried inside hypermedia links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Default for Method {
    fn default() -> Self {
        Self::Get
    }
}

impl Method {
    /// Returns the wire-level verb name.
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Hypermedia link pointing at a server resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name, e.g. `self` or `describedby`.
    #[serde(default)]
    pub rel: Option<String>,
    /// Verb the server expects on `href`.
    #[serde(default)]
    pub method: Method,
    /// Absolute resource address.
    pub href: String,
}

impl Link {
    /// Creates a read (GET) link for `href`.
    pub fn read(href: impl Into<String>) -> Self {
        Self {
            rel: None,
            method: Method::Get,
            href: href.into(),
        }
    }

    /// Creates a write (PUT) link for `href`.
    pub fn write(href: impl Into<String>) -> Self {
        Self {
            rel: None,
            method: Method::Put,
            href: href.into(),
        }
    }
}

/// Kind discriminator for object members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Property,
    Collection,
    Action,
}

/// Member descriptor of a remote object representation.
///
/// Members of kind [`MemberKind::Property`] are the only ones projected into
/// renderable properties; collections and actions are handled by their own
/// display models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(rename = "memberType")]
    pub kind: MemberKind,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub extensions: Value,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub disabled_reason: Option<String>,
}

/// Canonical in-memory snapshot of one remote domain object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TObject {
    pub links: Vec<Link>,
    #[serde(default)]
    pub extensions: Value,
    pub title: String,
    pub domain_type: String,
    pub instance_id: String,
    #[serde(default)]
    pub members: BTreeMap<String, Member>,
}

impl TObject {
    /// Builds the canonical snapshot from a server result payload.
    ///
    /// Total field-for-field projection; the only derived value is the
    /// stringified instance id.
    pub fn from_result(result_object: ResultObject) -> Self {
        let r = result_object.result;
        Self {
            links: r.links,
            extensions: r.extensions,
            title: r.title,
            domain_type: r.domain_type,
            instance_id: r.instance_id.to_string(),
            members: r.members,
        }
    }

    /// Returns the primary resource link, conventionally the first one.
    pub fn primary_link(&self) -> Option<&Link> {
        self.links.first()
    }

    /// Iterates property-kind members in member order.
    pub fn properties(&self) -> impl Iterator<Item = &Member> {
        self.members
            .values()
            .filter(|m| m.kind == MemberKind::Property)
    }
}

/// Inner representation of an action/invocation result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRepresentation {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub extensions: Value,
    pub title: String,
    pub domain_type: String,
    pub instance_id: i64,
    #[serde(default)]
    pub members: BTreeMap<String, Member>,
}

/// Server result payload wrapping one object representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultObject {
    pub result: ResultRepresentation,
}
