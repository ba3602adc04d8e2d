// Draft bookkeeping: pick tracking, roster buckets, settings, session state.

pub mod pick;
pub mod roster;
pub mod settings;
pub mod state;
