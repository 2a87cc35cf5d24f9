//! Class and method declarations.
//!
//! These are the records a reflection provider hands out. Each carries the
//! parameter set its docblock was parsed into; the parsing itself happens
//! upstream of this crate.

use annot_common::{ParamValue, ParameterSet};
use serde::{Deserialize, Serialize};

/// Member visibility. Only `Public` methods take part in resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "ParameterSet::is_empty")]
    pub annotations: ParameterSet,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        MethodDecl {
            name: name.into(),
            visibility,
            annotations: ParameterSet::new(),
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Attach one annotation parameter.
    pub fn annotate(
        mut self,
        group: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.annotations.insert(group, param, value);
        self
    }

    /// Replace the whole attached parameter set.
    pub fn with_annotations(mut self, annotations: ParameterSet) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    pub name: String,
    /// Name of the parent class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Class-level annotations.
    #[serde(default, skip_serializing_if = "ParameterSet::is_empty")]
    pub annotations: ParameterSet,
    /// Methods declared directly in this class, in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        ClassDecl {
            name: name.into(),
            extends: None,
            annotations: ParameterSet::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn annotate(
        mut self,
        group: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.annotations.insert(group, param, value);
        self
    }

    pub fn with_annotations(mut self, annotations: ParameterSet) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Find a method declared directly in this class.
    ///
    /// When a name is declared twice the last declaration wins.
    pub fn own_method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().rev().find(|m| m.name == name)
    }
}
