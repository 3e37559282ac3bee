pub mod change;
pub mod extremes;
pub mod momentum;

pub use change::*;
pub use extremes::*;
pub use momentum::*;
