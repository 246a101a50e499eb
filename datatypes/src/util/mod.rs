pub mod helpers;
mod result;

pub use result::Result;
