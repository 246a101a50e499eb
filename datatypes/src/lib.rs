pub mod axis;
pub mod coordinate_system;
pub mod error;
pub mod util;
