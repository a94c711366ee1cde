//! Turning a roll into per-tick destinations.
//!
//! Planning runs against a scratch copy of the player's path stack; the
//! live state only changes as the engine applies the plan one step at a
//! time.

use im::Vector;
use smallvec::SmallVec;

use super::roll::Roll;
use crate::board::LinkSet;

/// Destinations for each tick of one roll. Six entries fit inline.
pub type PlanSteps = SmallVec<[usize; 6]>;

/// Result of planning a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan {
    /// One destination per pip, in order.
    pub steps: PlanSteps,
    /// Top of the scratch stack after every step.
    pub target: usize,
}

/// Plan a roll from `path`.
///
/// Forward steps take the first link leaving the current square when
/// `shortcuts_unlocked`, otherwise advance one square; both cap at
/// `last_index`, and a capped step repeats the current square without
/// growing the stack. Backward steps pop the stack, bottoming out at
/// square 0.
#[must_use]
pub fn plan_move(
    path: &Vector<usize>,
    roll: Roll,
    shortcuts_unlocked: bool,
    links: &LinkSet,
    last_index: usize,
) -> MovePlan {
    let mut stack = path.clone();
    let mut steps = PlanSteps::new();

    for _ in 0..roll.value {
        let current = stack.last().copied().unwrap_or(0);

        let next = if roll.forward {
            let shortcut = if shortcuts_unlocked {
                links.from_square(current)
            } else {
                None
            };
            let next = shortcut.unwrap_or(current + 1).min(last_index);
            if next != current {
                stack.push_back(next);
            }
            next
        } else if stack.len() > 1 {
            stack.pop_back();
            stack.last().copied().unwrap_or(0)
        } else {
            0
        };

        steps.push(next);
    }

    MovePlan {
        target: stack.last().copied().unwrap_or(0),
        steps,
    }
}

/// Trial division up to the square root; 0 and 1 are not prime.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
