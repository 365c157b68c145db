//! Port traits defining external boundaries.
//!
//! The single boundary here is the cluster-orchestration control plane.
//! Implementations live in `src/adapters/`.

pub mod control_plane;

pub use control_plane::{ControlPlaneClient, DescribeFuture, ServiceDescriptor};
