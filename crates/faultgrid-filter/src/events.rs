//! Observability events for filter decisions.
//!
//! A filter silently excludes hosts rather than returning errors, so
//! operators diagnose placement behavior through these events. The sink
//! is an explicit constructor argument instead of a global logger,
//! letting tests capture and assert on what a filter reported.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use faultgrid_topology::HostId;

/// A notable filter decision, emitted alongside (never instead of) the
/// admit/reject result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FilterEvent {
    /// The candidate host has no failure-domain metadata and was
    /// rejected: it cannot satisfy a domain-diversity guarantee.
    HostWithoutDomain { host: HostId },
    /// A server-group peer has no failure-domain metadata. The peer is
    /// skipped, not treated as a conflict, but the diversity guarantee
    /// is weakened.
    PeerWithoutDomain { peer: HostId },
    /// The candidate host shares a failure domain with a group peer and
    /// was rejected.
    SameDomainConflict {
        host: HostId,
        peer: HostId,
        domain: String,
    },
}

/// Destination for filter events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: FilterEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: FilterEvent) {
        (**self).emit(event);
    }
}

/// Default sink: forwards events to `tracing` at the level matching
/// their severity (peers without a domain warrant a warning, the rest
/// is debug detail).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: FilterEvent) {
        match event {
            FilterEvent::HostWithoutDomain { host } => {
                debug!(%host, "host does not belong to any failure domain");
            }
            FilterEvent::PeerWithoutDomain { peer } => {
                warn!(host = %peer, "host does not belong to any failure domain");
            }
            FilterEvent::SameDomainConflict { host, peer, domain } => {
                debug!(
                    %host,
                    %peer,
                    failure_domain = %domain,
                    "host is in the same failure domain as another host in the server group"
                );
            }
        }
    }
}
