pub mod browser;
pub mod dataset;
pub mod day;
pub mod error;
pub mod merge;
pub mod model;
