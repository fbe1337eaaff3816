pub mod payload;
pub mod status;

pub use payload::*;
pub use status::*;
