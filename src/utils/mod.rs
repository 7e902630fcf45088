pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::pad_right;
