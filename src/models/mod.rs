pub mod city;
pub mod column;
pub mod filter;
pub mod month;
pub mod trip;

pub use city::City;
pub use column::Column;
pub use filter::{Filter, TimeMode, TimePeriod};
pub use trip::{Dataset, TripRecord};
