// Application and presentation layers of the cadence backend.
// Domain logic lives in cadence-domain, adapters in cadence-infrastructure.

pub mod application;
pub mod config;
pub mod presentation;
