pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod response;
pub mod routes;
pub mod state;
