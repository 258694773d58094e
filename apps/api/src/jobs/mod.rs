// Job postings: append-only JSON file store and the `/api/jobs` handlers.

pub mod handlers;
pub mod store;
