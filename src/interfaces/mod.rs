pub mod cli;
pub mod form;
