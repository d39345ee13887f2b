//! Fatal configuration errors

use crate::descriptor::GeometryKind;

/// Errors raised by scene construction and named lookup.
///
/// Every variant reflects an authoring-time mistake, not a runtime condition:
/// callers propagate and abort rather than recover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Shape argument count does not match what the geometry kind requires
    #[error("{kind:?} geometry takes {expected} shape argument(s), got {got}")]
    MalformedShapeArgs {
        kind: GeometryKind,
        expected: usize,
        got: usize,
    },

    /// No geometry constructor exists for this kind
    #[error("no geometry constructor for kind {0:?}")]
    UnimplementedGeometry(GeometryKind),

    /// A required named node was absent at lookup time
    #[error("couldn't find node named {0:?}")]
    NodeNotFound(String),

    /// A scene asset failed to load at startup
    #[error("could not load scene asset {0:?}")]
    AssetLoad(String),

    /// A physics shape was requested for a node without geometry
    #[error("node {0:?} has no geometry to derive a physics shape from")]
    MissingGeometry(String),
}
