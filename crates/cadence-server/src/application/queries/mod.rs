mod calendar;
mod heatmap;

pub use calendar::get_calendar;
pub use heatmap::get_heatmap;
