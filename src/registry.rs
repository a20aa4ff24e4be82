//! The Schema Registry (§4.2/§3.2): a process-wide mapping from absolute URI to the root LJT of
//! a registered schema, used to resolve `$ref`.
//!
//! Mirrors the teacher's `resolver.rs`, which keeps a shared `RwLock`-guarded map behind a
//! `lazy_static`. Entries are `Arc`-owned so a `$ref` lookup can hold on to a target tree without
//! fighting the borrow checker over the registry's own lock guard — the same role `Arc<Value>`
//! plays in the teacher's resolver.
use crate::{
    error::Result,
    tree::{self, Node},
};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

lazy_static::lazy_static! {
    static ref REGISTRY: RwLock<AHashMap<String, Arc<Node>>> = RwLock::new(AHashMap::new());
}

/// Builds the LJT for `schema` rooted at `uri` and stores it, overwriting any previous entry
/// under the same URI (last-writer-wins, §4.2).
pub(crate) fn register(schema: &Value, uri: &str) -> Result<()> {
    let node = tree::build(schema, uri)?;
    REGISTRY.write().insert(uri.to_string(), Arc::new(node));
    Ok(())
}

/// Looks up a registered schema's root node by URI.
pub(crate) fn lookup(uri: &str) -> Option<Arc<Node>> {
    REGISTRY.read().get(uri).cloned()
}

/// Removes a registered schema. A no-op if nothing was registered under `uri`.
pub(crate) fn unregister(uri: &str) {
    REGISTRY.write().remove(uri);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_lookup_unregister_round_trip() {
        let uri = "https://example.com/registry-test-schema";
        register(&json!({"type": "string"}), uri).unwrap();
        assert!(lookup(uri).is_some());
        unregister(uri);
        assert!(lookup(uri).is_none());
    }

    #[test]
    fn last_writer_wins() {
        let uri = "https://example.com/registry-test-overwrite";
        register(&json!({"type": "string"}), uri).unwrap();
        register(&json!({"type": "number"}), uri).unwrap();
        let node = lookup(uri).unwrap();
        let type_value = tree::object_get(&node, "type").unwrap();
        assert_eq!(type_value.as_str(), Some("number"));
        unregister(uri);
    }
}
