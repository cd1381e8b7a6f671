//! faultgrid-filter — failure-domain anti-affinity for host scheduling.
//!
//! Provides [`FailureDomainFilter`], a placement predicate that rejects
//! a candidate host when another member of the request's server group
//! already runs in the same failure domain. Intended to run as one
//! filter stage among many in a scheduler's filter pipeline; it ranks
//! nothing and mutates nothing.
//!
//! # Components
//!
//! - **`failure_domain`** — The evaluator itself
//! - **`hint`** — Tri-state parsing of loose boolean scheduler hints
//! - **`events`** — Observability sink for filter decisions
//! - **`error`** — Filter error taxonomy

pub mod error;
pub mod events;
pub mod failure_domain;
pub mod hint;

pub use error::{FilterError, FilterResult};
pub use events::{EventSink, FilterEvent, TracingSink};
pub use failure_domain::{DIFFERENT_FAILURE_DOMAIN_HINT, FailureDomainFilter};
pub use hint::HintValue;
