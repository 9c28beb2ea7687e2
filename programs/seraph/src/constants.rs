/// Capacity of the validator list
pub const MAX_VALIDATORS_IN_LIST: usize = 100;

/// Number of trailing epochs a validator is scored over
pub const SCORING_WINDOW_EPOCHS: u64 = 5;

/// Delegation targets are the top `1 / ELIGIBLE_FRACTION` of the list
pub const ELIGIBLE_FRACTION: usize = 10;
