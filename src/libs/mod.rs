pub mod caller;
pub mod gene;
pub mod io;
pub mod overlap;
pub mod stats;
