//! Dashboard selection state: the chosen university, time-slot filter and
//! score, plus the bookkeeping that keeps late responses from overwriting
//! newer ones.

mod score;
mod selection;
mod sequence;

pub use score::{ScoreInput, ScoreInputError};
pub use selection::{
    ALL_SLOTS_LABEL, SelectionAction, SelectionState, TimeSlotFilter, distinct_time_slots,
    filter_results,
};
pub use sequence::{FetchChannel, RequestId, RequestSequence};
