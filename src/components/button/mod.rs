mod button;
pub use button::*;

mod classes;
pub use classes::*;

mod styles;
