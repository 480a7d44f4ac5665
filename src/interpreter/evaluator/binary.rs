pub mod arithmetic;
pub mod comparison;
pub mod core;
pub mod logic;
pub mod power;
