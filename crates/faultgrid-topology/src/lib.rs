//! faultgrid-topology — topology model for FaultGrid placement filters.
//!
//! Defines the read-only snapshots a scheduler hands to a placement
//! filter (host state, aggregate memberships, server groups, placement
//! requests) and the [`TopologyDirectory`] collaborator through which
//! peer hosts' aggregate memberships are looked up.
//!
//! Failure domains are not a first-class entity: a host's domain is
//! whatever `failure_domain` metadata value its aggregates carry. This
//! crate only reads those labels; assigning them is an operator concern.

pub mod directory;
pub mod types;

pub use directory::{TopologyDirectory, TopologyError, TopologyResult};
pub use types::{
    Aggregate, FAILURE_DOMAIN_KEY, HostId, HostState, PlacementRequest, ServerGroup,
    first_failure_domain,
};
