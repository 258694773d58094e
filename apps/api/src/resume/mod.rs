// Resume upload and best-effort text extraction from PDF, DOCX, and plain text.

pub mod handlers;
pub mod text_extractor;
pub mod upload;
