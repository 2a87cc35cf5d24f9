//! Centralized limits for the annotation resolver.
//!
//! Class hierarchies come from user-supplied manifests, so every walk over
//! them is bounded. Keeping the bounds here avoids per-crate copies drifting
//! apart.

/// Maximum number of levels (the target class included) walked when
/// collecting a class's ancestor chain.
///
/// A chain deeper than this is reported as `HierarchyTooDeep` instead of
/// being walked to the end.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Initial capacity for the ancestor accumulator.
///
/// Most framework hierarchies are shallow (controller, base controller,
/// framework root).
pub const ANCESTOR_CHAIN_CAPACITY: usize = 4;
