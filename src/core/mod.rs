pub mod catalog;
pub mod clock;
pub mod peak;
pub mod pricing;
pub mod quoter;
