pub mod generate;
pub mod watch;
