mod aggregate;
mod repository;


pub use aggregate::{Profile, ProfileSettings, StreakChange, WorkHours};
pub use repository::ProfileRepository;
