//! Topology directory collaborator.
//!
//! Placement filters resolve peer hosts' aggregate memberships through
//! this trait. Implementations are expected to hit a network or database
//! backend, so the lookup is async and fallible; cancellation and
//! timeouts surface as [`TopologyError`] like any other lookup failure.

use thiserror::Error;

use crate::types::{Aggregate, HostId};

/// Result type alias for topology lookups.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors raised by a topology directory lookup.
///
/// A lookup error is never evidence that a host has no failure domain:
/// "the directory could not answer" and "the answer is an empty
/// aggregate list" must stay distinguishable to the caller.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("aggregate lookup failed for host {host}: {source}")]
    Lookup {
        host: HostId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("topology directory unavailable: {0}")]
    Unavailable(String),
}

impl TopologyError {
    pub fn lookup(
        host: impl Into<HostId>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Lookup {
            host: host.into(),
            source: Box::new(source),
        }
    }
}

/// Read access to host→aggregate memberships.
///
/// Implementations must be safe to share across concurrently running
/// filter invocations; the filter performs a fresh lookup per peer host
/// and never caches results across calls.
pub trait TopologyDirectory: Send + Sync {
    /// The aggregates `host` belongs to, in the topology's iteration
    /// order. An unknown host yields an empty list, not an error.
    fn aggregates_for_host(
        &self,
        host: &str,
    ) -> impl Future<Output = TopologyResult<Vec<Aggregate>>> + Send;
}

impl<T: TopologyDirectory + ?Sized> TopologyDirectory for &T {
    fn aggregates_for_host(
        &self,
        host: &str,
    ) -> impl Future<Output = TopologyResult<Vec<Aggregate>>> + Send {
        (**self).aggregates_for_host(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleHost;

    impl TopologyDirectory for SingleHost {
        async fn aggregates_for_host(&self, host: &str) -> TopologyResult<Vec<Aggregate>> {
            if host == "host1" {
                Ok(vec![Aggregate::with_failure_domain("rack-a", "domain1")])
            } else {
                Ok(vec![])
            }
        }
    }

    #[tokio::test]
    async fn unknown_host_yields_empty_list() {
        let aggregates = SingleHost.aggregates_for_host("other").await.unwrap();
        assert!(aggregates.is_empty());
    }

    #[tokio::test]
    async fn shared_reference_delegates() {
        let directory = SingleHost;
        let aggregates = (&directory).aggregates_for_host("host1").await.unwrap();
        assert_eq!(
            crate::types::first_failure_domain(&aggregates),
            Some("domain1")
        );
    }

    #[test]
    fn lookup_error_formats_with_host() {
        let err = TopologyError::lookup(
            "host1",
            std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline exceeded"),
        );
        assert!(err.to_string().contains("host1"));
    }
}
