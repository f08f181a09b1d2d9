mod direction;
mod transaction;

pub use direction::Direction;
pub use transaction::{InvalidTransaction, Transaction};

#[cfg(test)]
mod tests;
