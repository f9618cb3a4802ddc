pub mod chart;
pub mod criteria;
pub mod launch;

pub use chart::*;
pub use criteria::*;
pub use launch::*;
