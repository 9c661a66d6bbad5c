//! Shared container-tree structure for the bundled backends.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Value;

/// One container: named values plus nested child containers.
///
/// Names keep their original casing but compare case-insensitively,
/// matching the host registries this layer stands in for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct Tree {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    values: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, Tree>,
}

impl Tree {
    fn child(&self, name: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.children
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    fn child_mut_or_create(&mut self, name: &str) -> &mut Self {
        let key = self
            .children
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());

        self.children.entry(key).or_default()
    }

    /// Resolve a slash-delimited container path. The empty path is the
    /// root itself.
    pub fn node(&self, path: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }

        match path.split_once('/') {
            None => self.child(path),
            Some((head, rest)) => self.child(head)?.node(rest),
        }
    }

    pub fn node_mut(&mut self, path: &str) -> Option<&mut Self> {
        if path.is_empty() {
            return Some(self);
        }

        match path.split_once('/') {
            None => self.child_mut(path),
            Some((head, rest)) => self.child_mut(head)?.node_mut(rest),
        }
    }

    /// Resolve a container path, creating every missing segment.
    pub fn node_mut_or_create(&mut self, path: &str) -> &mut Self {
        if path.is_empty() {
            return self;
        }

        match path.split_once('/') {
            None => self.child_mut_or_create(path),
            Some((head, rest)) => self.child_mut_or_create(head).node_mut_or_create(rest),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        let key = self
            .values
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());

        self.values.insert(key, value);
    }

    pub fn remove(&mut self, name: &str) {
        let key = self
            .values
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .cloned();

        if let Some(key) = key {
            self.values.remove(&key);
        }
    }

    /// Remove a whole child container by path.
    pub fn remove_tree(&mut self, path: &str) {
        let (parent_path, name) = match path.rsplit_once('/') {
            None => ("", path),
            Some((parent, name)) => (parent, name),
        };

        let Some(parent) = self.node_mut(parent_path) else {
            return;
        };

        let key = parent
            .children
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .cloned();

        if let Some(key) = key {
            parent.children.remove(&key);
        }
    }

    pub fn value_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn child_names(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }
}
