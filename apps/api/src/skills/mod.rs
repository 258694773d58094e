// Skill detection against a closed vocabulary, course lookup, and skill-gap analysis.

pub mod chunker;
pub mod courses;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod vocabulary;
