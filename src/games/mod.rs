//! Game rule engines.

pub mod othello;
