pub mod daily_cap;
pub mod duration;
