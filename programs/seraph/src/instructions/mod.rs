// Every module exports a `handler`; callers go through the module path
#![allow(ambiguous_glob_reexports)]

pub mod calculate_score;
pub mod deactivate_stake;
pub mod delegate_stake;
pub mod initialize;
pub mod redelegate_stake;

pub use calculate_score::*;
pub use deactivate_stake::*;
pub use delegate_stake::*;
pub use initialize::*;
pub use redelegate_stake::*;
