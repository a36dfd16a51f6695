mod classes;
pub use classes::*;

mod colors;
pub use colors::*;

mod units;
pub use units::*;
