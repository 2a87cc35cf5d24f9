//! Parameter merging.
//!
//! Ancestors are applied nearest first, and each step feeds the next, so a
//! grandparent's string value ends up in front of the parent's, which is in
//! front of the method's own:
//!
//! ```text
//! grandparent  route.path = "/api"
//! parent       route.path = "/v1"
//! method       route.path = "/users"
//! resolved     route.path = "/api/v1/users"
//! ```

use crate::class_info::ClassAnnotationInfo;
use crate::error::AnnotationConflictError;
use annot_common::{ParamGroup, ParamValue, ParameterSet};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Merge `ancestors` (nearest first) into `own` and return the result.
pub fn merge_parameters(
    mut own: ParameterSet,
    ancestors: &[ClassAnnotationInfo],
) -> Result<ParameterSet, AnnotationConflictError> {
    for ancestor in ancestors {
        if ancestor.is_empty() {
            continue;
        }
        trace!(ancestor = ancestor.class_name(), "merge ancestor annotations");

        for (group, params) in ancestor.parameters() {
            match own.group_mut(group) {
                Some(own_group) => merge_group(own_group, params, ancestor, group)?,
                None => {
                    own.insert_group(group.clone(), params.clone());
                }
            }
        }
    }

    Ok(own)
}

fn merge_group(
    own_group: &mut ParamGroup,
    params: &ParamGroup,
    ancestor: &ClassAnnotationInfo,
    group: &str,
) -> Result<(), AnnotationConflictError> {
    for (name, value) in params {
        match own_group.get_mut(name) {
            Some(existing) => *existing = combine(value, existing, ancestor, group, name)?,
            None => {
                own_group.insert(name.clone(), value.clone());
            }
        }
    }

    Ok(())
}

fn combine(
    inherited: &ParamValue,
    existing: &ParamValue,
    ancestor: &ClassAnnotationInfo,
    group: &str,
    name: &str,
) -> Result<ParamValue, AnnotationConflictError> {
    match (inherited, existing) {
        (ParamValue::Scalar(prefix), ParamValue::Scalar(rest)) => {
            Ok(ParamValue::Scalar(format!("{prefix}{rest}")))
        }
        (ParamValue::List(parent_items), ParamValue::List(current)) => {
            Ok(ParamValue::List(union(parent_items, current)))
        }
        _ => Err(AnnotationConflictError {
            ancestor: ancestor.class_name().to_string(),
            group: group.to_string(),
            parameter: name.to_string(),
            ancestor_kind: inherited.kind(),
            own_kind: existing.kind(),
        }),
    }
}

/// Set union keeping first occurrences: inherited items, then new ones.
fn union(inherited: &[String], current: &[String]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    inherited
        .iter()
        .chain(current)
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
