//! Validator scoring
//!
//! A validator's score for one epoch is the number of vote credits it earned
//! in that epoch, discounted by its commission. The final score is the mean
//! over every epoch of the trailing window that has an entry. Integer math
//! only so results are identical on every validator running the program.

use crate::SCORING_WINDOW_EPOCHS;

/// `(epoch, credits, prev_credits)` as stored in a vote account
pub type EpochCredits = (u64, u64, u64);

/// Credits earned in one epoch, net of commission
pub fn epoch_score(credits_earned: u64, commission: u8) -> u64 {
    let keep = 100u64 - u64::from(commission.min(100));
    credits_earned.saturating_mul(keep) / 100
}

/// First epoch counted when scoring at `current_epoch`
pub fn window_start(current_epoch: u64) -> u64 {
    current_epoch.saturating_sub(SCORING_WINDOW_EPOCHS)
}

/// Mean epoch score over the scoring window, `None` if no epoch qualifies.
///
/// A vote account only stores its current commission, so that one rate is
/// applied to every epoch in the window. A validator that raised its
/// commission mid-window is scored as if it had always charged the new rate.
pub fn average_score(
    epoch_credits: &[EpochCredits],
    commission: u8,
    current_epoch: u64,
) -> Option<u32> {
    let start = window_start(current_epoch);

    let (total, count) = epoch_credits
        .iter()
        .filter(|(epoch, _, _)| (start..=current_epoch).contains(epoch))
        .fold((0u64, 0u64), |(total, count), (_, credits, prev_credits)| {
            let earned = credits.saturating_sub(*prev_credits);
            (total.saturating_add(epoch_score(earned, commission)), count + 1)
        });

    if count == 0 {
        return None;
    }

    Some(u32::try_from(total / count).unwrap_or(u32::MAX))
}
