pub mod add;
pub mod browse;
pub mod edit;
pub mod store;
pub mod timer;

pub use store::EntryStore;
pub use timer::{StoppedTimer, TimerSession};
