//! Monument Quarries - batch placement of mining quarries beside warehouse monuments

pub mod core;
pub mod ledger;
pub mod monuments;
pub mod placement;
pub mod world;
