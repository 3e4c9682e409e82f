pub mod holding;
pub mod mining;
pub mod quote;
