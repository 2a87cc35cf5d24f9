use annot_common::ValueKind;

/// A parameter that is a string on one side of a merge and a list on the
/// other.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "parameter '{group}.{parameter}' is a {ancestor_kind} in '{ancestor}' but a {own_kind} below it"
)]
pub struct AnnotationConflictError {
    /// Class whose class-level annotation could not be merged.
    pub ancestor: String,
    pub group: String,
    pub parameter: String,
    pub ancestor_kind: ValueKind,
    pub own_kind: ValueKind,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("class '{name}' cannot be reflected")]
    UnknownClass { name: String },
    #[error("class '{class}' extends '{parent}', which cannot be reflected")]
    UnknownParent { class: String, parent: String },
    #[error("circular inheritance: {}", .cycle.join(" -> "))]
    CyclicInheritance { cycle: Vec<String> },
    #[error("class '{class}' has more than {limit} levels of inheritance")]
    HierarchyTooDeep { class: String, limit: usize },
    #[error("cannot merge annotations of '{class}::{method}'")]
    Conflict {
        class: String,
        method: String,
        #[source]
        source: AnnotationConflictError,
    },
}
