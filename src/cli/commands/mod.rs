pub mod add;
pub mod browse;
pub mod edit;
pub mod start;
pub mod stop;
