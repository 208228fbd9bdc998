mod aggregate;
mod repository;
mod schedule;
mod value_objects;


pub use aggregate::CheckIn;
pub use repository::CheckInRepository;
pub use schedule::{next_check_in, CheckInSchedule};
pub use value_objects::{EnergyLevel, Mood};
