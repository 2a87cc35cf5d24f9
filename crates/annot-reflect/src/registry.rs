//! In-memory class registry.
//!
//! `ClassRegistry` is the `ReflectionProvider` used outside a host runtime:
//! classes are registered one by one or loaded from JSON manifests of the
//! form
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "name": "App\\UserController",
//!       "extends": "App\\Controller",
//!       "annotations": { "route": { "path": "/users" } },
//!       "methods": [
//!         { "name": "indexAction", "annotations": { "route": { "path": "/" } } },
//!         { "name": "helper", "visibility": "private" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::decl::ClassDecl;
use crate::provider::{MethodRef, ReflectionProvider};
use annot_common::limits::MAX_ANCESTOR_DEPTH;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("class '{name}' is declared more than once")]
    DuplicateClass { name: String },
    #[error("invalid class manifest: {0}")]
    InvalidManifest(#[from] serde_json::Error),
}

/// A JSON document describing a set of classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassManifest {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl ClassManifest {
    pub fn parse(source: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Classes indexed by name, kept in registration order.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDecl>,
    by_name: FxHashMap<String, usize>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from one manifest.
    pub fn from_manifest_str(source: &str) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.load_manifest(source)?;
        Ok(registry)
    }

    /// Register a class. Names must be unique across the registry.
    pub fn register(&mut self, class: ClassDecl) -> Result<(), RegistryError> {
        if self.by_name.contains_key(&class.name) {
            return Err(RegistryError::DuplicateClass { name: class.name });
        }
        trace!(
            class = %class.name,
            extends = ?class.extends,
            methods = class.methods.len(),
            "register class"
        );
        self.by_name.insert(class.name.clone(), self.classes.len());
        self.classes.push(class);
        Ok(())
    }

    /// Builder-style `register`.
    pub fn with_class(mut self, class: ClassDecl) -> Result<Self, RegistryError> {
        self.register(class)?;
        Ok(self)
    }

    /// Parse a manifest and register every class in it.
    ///
    /// Returns the number of classes added. Nothing is registered when the
    /// manifest fails to parse; a duplicate stops registration at that class.
    pub fn load_manifest(&mut self, source: &str) -> Result<usize, RegistryError> {
        let manifest = ClassManifest::parse(source)?;
        self.extend_from(manifest)
    }

    pub fn extend_from(&mut self, manifest: ClassManifest) -> Result<usize, RegistryError> {
        let count = manifest.classes.len();
        for class in manifest.classes {
            self.register(class)?;
        }
        debug!(count, total = self.classes.len(), "loaded class manifest");
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<&ClassDecl> {
        self.by_name.get(name).map(|&idx| &self.classes[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes.iter()
    }
}

impl ReflectionProvider for ClassRegistry {
    fn reflect(&self, name: &str) -> Option<&ClassDecl> {
        self.get(name)
    }

    fn public_methods<'a>(&'a self, class: &'a ClassDecl) -> Vec<MethodRef<'a>> {
        let mut methods = Vec::new();
        // Names already provided by a nearer class; those hide ancestors.
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut current = Some(class);
        let mut depth = 0;

        while let Some(decl) = current {
            if !visited.insert(decl.name.as_str()) || depth >= MAX_ANCESTOR_DEPTH {
                break;
            }
            let is_target = depth == 0;
            let mut declared_here = Vec::new();
            for method in &decl.methods {
                if !is_target && seen.contains(method.name.as_str()) {
                    continue;
                }
                declared_here.push(method.name.as_str());
                if method.is_public() {
                    methods.push(MethodRef {
                        method,
                        declaring_class: &decl.name,
                    });
                }
            }
            seen.extend(declared_here);

            current = self.parent_of(decl).and_then(|parent| self.get(parent));
            depth += 1;
        }

        methods
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
