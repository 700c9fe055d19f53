pub mod output;
pub mod shell;
pub mod spinner;
