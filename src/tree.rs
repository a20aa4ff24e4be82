//! The Located JSON Tree (LJT): a JSON value where every node, including object members and
//! array elements, carries a location string (§3.1), plus the tree utilities of §4.1.
use crate::{
    error::{Error, Result},
    paths,
};
use serde_json::Value;

/// A node in a Located JSON Tree.
///
/// Mirrors the six JSON shapes plus a `Property` wrapper for object members (§3.1). Built once,
/// per [`crate::register_schema`] or [`crate::validate`] call, and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Null(String),
    Boolean(String, bool),
    Number(String, f64),
    String(String, String),
    Array(String, Vec<Node>),
    /// Children are `Property` nodes, in document order.
    Object(String, Vec<Node>),
    /// `(location, key node, value node)`. The key node and the value node share `location`:
    /// it points at the value slot (§3.1's invariant on property nodes).
    Property(String, Box<Node>, Box<Node>),
}

impl Node {
    pub(crate) fn location(&self) -> &str {
        match self {
            Node::Null(loc)
            | Node::Boolean(loc, _)
            | Node::Number(loc, _)
            | Node::String(loc, _)
            | Node::Array(loc, _)
            | Node::Object(loc, _)
            | Node::Property(loc, _, _) => loc,
        }
    }

    pub(crate) fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Boolean(_, b) => Some(*b),
            _ => None,
        }
    }

    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(_, n) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(_, s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The property children of an `Object` node, in document order.
    pub(crate) fn as_object(&self) -> Option<&[Node]> {
        match self {
            Node::Object(_, props) => Some(props),
            _ => None,
        }
    }

    pub(crate) fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(_, items) => Some(items),
            _ => None,
        }
    }

    /// `(key node, value node)` if this is a `Property` node.
    pub(crate) fn as_property(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Property(_, key, value) => Some((key, value)),
            _ => None,
        }
    }

    pub(crate) fn is_object(&self) -> bool {
        matches!(self, Node::Object(..))
    }

    pub(crate) fn is_array(&self) -> bool {
        matches!(self, Node::Array(..))
    }

    pub(crate) fn is_string(&self) -> bool {
        matches!(self, Node::String(..))
    }

    pub(crate) fn is_number(&self) -> bool {
        matches!(self, Node::Number(..))
    }

    pub(crate) fn is_boolean(&self) -> bool {
        matches!(self, Node::Boolean(..))
    }

    pub(crate) fn is_null(&self) -> bool {
        matches!(self, Node::Null(..))
    }

    /// A number with no fractional part, i.e. what `"integer"` in the `type` keyword matches.
    pub(crate) fn is_integer(&self) -> bool {
        match self {
            Node::Number(_, n) => n.fract() == 0.0 && n.is_finite(),
            _ => false,
        }
    }
}

/// Converts a JSON value to an LJT rooted at `<base_uri>#` (§4.1's `build`).
pub(crate) fn build(value: &Value, base_uri: &str) -> Result<Node> {
    build_node(value, paths::root_location(base_uri))
}

fn build_node(value: &Value, location: String) -> Result<Node> {
    match value {
        Value::Null => Ok(Node::Null(location)),
        Value::Bool(b) => Ok(Node::Boolean(location, *b)),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => Ok(Node::Number(location, f)),
            _ => Err(Error::InvalidJson {
                location,
                reason: format!("number {} cannot be represented as a finite 64-bit float", n),
            }),
        },
        Value::String(s) => Ok(Node::String(location, s.clone())),
        Value::Array(items) => {
            let mut children = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let child_location = paths::append_index(&location, index);
                children.push(build_node(item, child_location)?);
            }
            Ok(Node::Array(location, children))
        }
        Value::Object(map) => {
            let mut children = Vec::with_capacity(map.len());
            for (key, value) in map {
                let prop_location = paths::append_property(&location, key);
                let key_node = Node::String(prop_location.clone(), key.clone());
                let value_node = build_node(value, prop_location.clone())?;
                children.push(Node::Property(
                    prop_location,
                    Box::new(key_node),
                    Box::new(value_node),
                ));
            }
            Ok(Node::Object(location, children))
        }
    }
}

/// Fails with `InvalidSchema` unless `node` is an object (§4.1's `assert-type`, specialized to
/// the one shape every keyword handler that needs it actually asks for).
pub(crate) fn assert_object(node: &Node) -> Result<&[Node]> {
    node.as_object().ok_or_else(|| Error::InvalidSchema {
        location: node.location().to_string(),
    })
}

/// Fails with `InvalidSchema` unless `node` is an array.
pub(crate) fn assert_array(node: &Node) -> Result<&[Node]> {
    node.as_array().ok_or_else(|| Error::InvalidSchema {
        location: node.location().to_string(),
    })
}

/// Looks up a property's value slot by key, in document order; `None` if absent.
pub(crate) fn object_get<'a>(object: &'a Node, key: &str) -> Option<&'a Node> {
    object.as_object()?.iter().find_map(|prop| {
        let (prop_key, prop_value) = prop.as_property()?;
        if prop_key.as_str() == Some(key) {
            Some(prop_value)
        } else {
            None
        }
    })
}

pub(crate) fn object_has(object: &Node, key: &str) -> bool {
    object_get(object, key).is_some()
}

/// All member keys of an object node, in document order.
pub(crate) fn object_keys(object: &Node) -> Vec<&str> {
    object
        .as_object()
        .into_iter()
        .flatten()
        .filter_map(|prop| prop.as_property())
        .filter_map(|(key, _)| key.as_str())
        .collect()
}

/// Returns the *value* slot named by a single pointer reference-token: an object member by key,
/// or an array element by decimal index.
pub(crate) fn pointer_step<'a>(root: &'a Node, token: &str, location: &str) -> Result<&'a Node> {
    match root {
        Node::Object(..) => object_get(root, token).ok_or_else(|| Error::InvalidReference {
            location: location.to_string(),
            reference: token.to_string(),
        }),
        Node::Array(_, items) => {
            let index: usize = token.parse().map_err(|_| Error::InvalidReference {
                location: location.to_string(),
                reference: token.to_string(),
            })?;
            items.get(index).ok_or_else(|| Error::InvalidReference {
                location: location.to_string(),
                reference: token.to_string(),
            })
        }
        _ => Err(Error::InvalidReference {
            location: location.to_string(),
            reference: token.to_string(),
        }),
    }
}

/// Walks a JSON Pointer (its reference tokens already percent/RFC-6901 decoded by the caller is
/// *not* assumed — `pointer` is the raw fragment text and each token is decoded here) from
/// `root`, failing with `InvalidReference` on any dangling step.
pub(crate) fn pointer_get<'a>(pointer: &str, root: &'a Node) -> Result<&'a Node> {
    if pointer.is_empty() {
        return Ok(root);
    }
    let mut current = root;
    for raw_token in pointer.split('/').skip(1) {
        let token = paths::decode_pointer_token(raw_token);
        current = pointer_step(current, &token, root.location())?;
    }
    Ok(current)
}
