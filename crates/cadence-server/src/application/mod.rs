pub mod dtos;
pub mod parse;
pub mod queries;
pub mod services;
