// Infrastructure layer - Adapters for persistence, outbound HTTP and logging.
// Implements the ports declared in cadence-domain.

pub mod ai;
pub mod logging;
pub mod notification;
pub mod persistence;
