mod client;
mod types;

pub use client::RecommendationClient;
pub use types::{
    CheckInSnapshot, RecommendationSet, RecommendationSnapshot, RecommendedTask, TaskSnapshot,
    WorkHoursSnapshot,
};
