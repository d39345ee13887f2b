//! roll-scene: declarative scene descriptors for a minimal AR demo
//!
//! This crate provides the pieces a small AR scene needs:
//! - An immutable, strongly typed descriptor tree for authoring node
//!   hierarchies as literal configuration data
//! - A recursive tree builder that materializes descriptors into a runtime
//!   scene graph (names, transforms, geometry, materials)
//! - A scene-graph node type with depth-first named lookup
//! - A physics attachment facade (shapes derived from node geometry, bodies
//!   assigned onto nodes)
//! - An AR session abstraction (run/pause) with an in-process simulation
//! - An application framework driving the session lifecycle and input

pub mod app;
pub mod builder;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod node;
pub mod physics;
pub mod scene;
pub mod session;
pub mod spatial;

// Re-export commonly used types
pub use app::{ArApp, ArAppRunner, ViewEvent};
pub use builder::build;
pub use descriptor::{GeometryKind, NodeDescriptor, ShapeSpec};
pub use error::SceneError;
pub use geometry::{Color, Geometry, Material};
pub use node::SceneNode;
pub use physics::{BodyKind, PhysicsBody, PhysicsShape, ShapeOptions, ShapeType};
pub use scene::Scene;
pub use session::{ArSession, SessionState, SimulatedSession, WorldTrackingConfig};
pub use spatial::{Transform, Vector3D};
