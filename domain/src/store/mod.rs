//! Quote store: the loaded sequence, its parsing, and random selection.

pub mod parsing;
pub mod quote_store;
pub mod selection;
