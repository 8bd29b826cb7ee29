pub mod logger;
pub mod theme;

pub use logger::Logger;
