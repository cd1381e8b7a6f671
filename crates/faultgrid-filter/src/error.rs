//! Filter error types.

use thiserror::Error;

/// Result type alias for filter evaluations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while evaluating a placement filter.
///
/// Only infrastructure failures reach this enum. Missing failure-domain
/// metadata and unparseable hints are ordinary outcomes with a defined
/// admit/reject policy, not errors.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("topology lookup error: {0}")]
    Topology(#[from] faultgrid_topology::TopologyError),
}
