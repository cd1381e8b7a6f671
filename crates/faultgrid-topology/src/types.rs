//! Domain types for placement filtering.
//!
//! All of these are immutable snapshots owned by the calling scheduler
//! framework for the duration of a single filter invocation. Nothing in
//! this crate mutates them or retains references past the call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Unique identifier for a compute host.
pub type HostId = String;

/// Aggregate metadata key that designates a host's failure domain.
pub const FAILURE_DOMAIN_KEY: &str = "failure_domain";

// ── Aggregates ─────────────────────────────────────────────────────

/// A named grouping of hosts carrying key/value metadata.
///
/// Aggregates are the mechanism through which failure-domain labels are
/// attached to hosts. A host may belong to any number of aggregates;
/// only the `failure_domain` metadata key matters to the filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Aggregate {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

impl Aggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: HashMap::new(),
        }
    }

    /// Convenience constructor for an aggregate carrying a failure domain.
    pub fn with_failure_domain(name: impl Into<String>, domain: impl Into<String>) -> Self {
        let mut agg = Self::new(name);
        agg.metadata
            .insert(FAILURE_DOMAIN_KEY.to_string(), domain.into());
        agg
    }
}

/// Return the `failure_domain` value of the first aggregate carrying the
/// key, or `None` if no aggregate does.
///
/// First match wins: if several aggregates each carry a `failure_domain`
/// key, whichever appears first in the slice is used and the rest are
/// ignored, with no conflict detection. This mirrors how the upstream
/// topology treats such (malformed) data; "fixing" it would change
/// admit/reject results.
///
/// `None` ("host has no known failure domain") is a distinct state from
/// an empty-string domain, which is a valid label like any other.
pub fn first_failure_domain(aggregates: &[Aggregate]) -> Option<&str> {
    aggregates
        .iter()
        .find_map(|agg| agg.metadata.get(FAILURE_DOMAIN_KEY))
        .map(String::as_str)
}

// ── Hosts ──────────────────────────────────────────────────────────

/// Read-only snapshot of a candidate host under evaluation.
///
/// The scheduler framework attaches the host's own aggregate memberships
/// before invoking any filter, so resolving the candidate's failure
/// domain never needs a directory round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostState {
    pub host: HostId,
    /// Aggregate memberships in the order the topology reports them.
    pub aggregates: Vec<Aggregate>,
}

impl HostState {
    pub fn new(host: impl Into<HostId>, aggregates: Vec<Aggregate>) -> Self {
        Self {
            host: host.into(),
            aggregates,
        }
    }

    /// The host's failure domain, resolved first-match over its
    /// aggregates (see [`first_failure_domain`]).
    pub fn failure_domain(&self) -> Option<&str> {
        first_failure_domain(&self.aggregates)
    }
}

// ── Server groups & requests ───────────────────────────────────────

/// A group of co-scheduled instances subject to shared placement
/// constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerGroup {
    pub id: String,
    /// Hosts already holding a member of this group, in placement order.
    /// May be empty for a group with no members placed yet.
    pub hosts: Vec<HostId>,
}

impl ServerGroup {
    pub fn new(id: impl Into<String>, hosts: Vec<HostId>) -> Self {
        Self {
            id: id.into(),
            hosts,
        }
    }
}

/// One placement request as seen by a host filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlacementRequest {
    /// Loosely-typed scheduler hints: each key maps to the list of
    /// values supplied by the caller, usually a single element.
    pub scheduler_hints: HashMap<String, Vec<String>>,
    /// The server group this instance belongs to, if any.
    pub instance_group: Option<ServerGroup>,
    /// True when the scheduler is re-placing an existing instance
    /// (rebuild) rather than placing a new one.
    pub scheduling_for_rebuild: bool,
}

impl PlacementRequest {
    /// First value supplied for a scheduler hint, if any.
    pub fn hint(&self, key: &str) -> Option<&str> {
        self.scheduler_hints
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scheduler_hints
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_group(mut self, group: ServerGroup) -> Self {
        self.instance_group = Some(group);
        self
    }
}
