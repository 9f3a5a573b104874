pub mod bar;
pub mod chart;
pub mod indicators;
pub mod inputs;
pub mod signals;

pub use bar::*;
pub use chart::*;
pub use indicators::*;
pub use inputs::*;
pub use signals::*;
