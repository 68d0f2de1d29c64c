pub mod effect;
pub mod interval;
pub mod timeline;

pub use effect::*;
pub use interval::*;
pub use timeline::*;
