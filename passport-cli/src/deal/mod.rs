//! Deal document assembly
//!
//! Maps accepted Passport rows onto the deal API's input schema: one deal
//! per conversion run, one building per row, one service per building.

mod mapper;
mod types;

pub use mapper::build_deal;
pub use types::*;
