//! Failure-domain anti-affinity filter.
//!
//! Rejects a candidate host when another member of the request's server
//! group already occupies the same failure domain, so that a group's
//! instances end up spread across independent fault boundaries.
//!
//! The constraint is opt-out per request: an explicitly falsy
//! `different_failure_domain` scheduler hint bypasses it, while an
//! absent or truthy hint leaves it active for any grouped instance.

use faultgrid_topology::{HostState, PlacementRequest, TopologyDirectory, first_failure_domain};

use crate::error::FilterResult;
use crate::events::{EventSink, FilterEvent, TracingSink};
use crate::hint::HintValue;

/// Scheduler hint key that controls this filter.
pub const DIFFERENT_FAILURE_DOMAIN_HINT: &str = "different_failure_domain";

/// Placement predicate enforcing failure-domain diversity within a
/// server group.
///
/// Stateless and reentrant: one instance may serve many concurrent
/// `evaluate` calls. Peer memberships are looked up fresh through the
/// directory on every call, with no caching across peers or calls.
pub struct FailureDomainFilter<D, S = TracingSink> {
    directory: D,
    sink: S,
}

impl<D: TopologyDirectory> FailureDomainFilter<D> {
    /// Build a filter that reports events through `tracing`.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            sink: TracingSink,
        }
    }
}

impl<D: TopologyDirectory, S: EventSink> FailureDomainFilter<D, S> {
    /// Build a filter with an explicit event sink.
    pub fn with_sink(directory: D, sink: S) -> Self {
        Self { directory, sink }
    }

    /// Decide whether `host` may receive the instance described by
    /// `request`.
    ///
    /// Returns `Ok(true)` when the host is admissible and `Ok(false)`
    /// when it must be excluded. Only directory lookup failures are
    /// errors; missing failure-domain metadata resolves to an
    /// admit/reject decision plus an event, never an `Err`.
    pub async fn evaluate(
        &self,
        host: &HostState,
        request: &PlacementRequest,
    ) -> FilterResult<bool> {
        // Anti-affinity is not re-checked when re-placing an existing
        // instance.
        if request.scheduling_for_rebuild {
            return Ok(true);
        }

        // Only an explicitly falsy hint bypasses the check; an absent
        // or malformed hint does not.
        let hint = HintValue::parse(request.hint(DIFFERENT_FAILURE_DOMAIN_HINT));
        if hint.is_explicitly_false() {
            return Ok(true);
        }

        // No server group, no anti-affinity obligation.
        let Some(group) = &request.instance_group else {
            return Ok(true);
        };

        // A host with no known failure domain cannot satisfy a
        // domain-diversity guarantee.
        let Some(failure_domain) = host.failure_domain() else {
            self.sink.emit(FilterEvent::HostWithoutDomain {
                host: host.host.clone(),
            });
            return Ok(false);
        };

        // Empty group: no peers to conflict with.
        if group.hosts.is_empty() {
            return Ok(true);
        }

        for peer in &group.hosts {
            let peer_aggregates = self.directory.aggregates_for_host(peer).await?;

            let Some(peer_domain) = first_failure_domain(&peer_aggregates) else {
                // Never a conflict, but the diversity guarantee is
                // weaker than the operator intended.
                self.sink.emit(FilterEvent::PeerWithoutDomain {
                    peer: peer.clone(),
                });
                continue;
            };

            if peer_domain == failure_domain {
                self.sink.emit(FilterEvent::SameDomainConflict {
                    host: host.host.clone(),
                    peer: peer.clone(),
                    domain: failure_domain.to_string(),
                });
                return Ok(false);
            }
        }

        Ok(true)
    }
}
