pub mod generate;
pub mod validation;
pub mod watch;
