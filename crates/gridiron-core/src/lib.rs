// Library root: re-exports all modules so integration tests and the
// interactive app can access the draft-advice API.

pub mod advice;
pub mod config;
pub mod draft;
pub mod player;
pub mod valuation;
