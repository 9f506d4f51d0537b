pub mod config;
pub mod row;
pub mod viewport;

pub use config::*;
pub use row::*;
pub use viewport::*;
