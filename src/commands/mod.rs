mod breakdowns;
mod dashboard;
mod report;
mod simulate;
mod zones;

pub use breakdowns::{places, priorities, profiles, undecided};
pub use dashboard::dashboard;
pub use report::report;
pub use simulate::simulate;
pub use zones::zones;
