// Library interface for the depwiz binary and tests

pub mod catalog;
pub mod cli;
pub mod error;
pub mod packages;
pub mod project;
pub mod selector;
pub mod utils;
pub mod wizard;
