//! Best-effort text extraction. Every failure degrades to an empty string.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

/// Extracts text from `path` on the blocking pool. Never fails.
pub async fn extract_text(path: PathBuf) -> String {
    let shown = path.display().to_string();
    match tokio::task::spawn_blocking(move || extract_text_from_file(&path)).await {
        Ok(text) => text,
        Err(e) => {
            // pdf-extract panics on some malformed documents
            warn!("Text extraction for {shown} aborted: {e}");
            String::new()
        }
    }
}

/// Dispatches on the lowercase extension: `.pdf`, `.docx`, else UTF-8 text.
pub fn extract_text_from_file(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let result = match ext.as_deref() {
        Some("pdf") => extract_pdf(path),
        Some("docx") => extract_docx(path),
        _ => std::fs::read_to_string(path).context("Failed to read text file"),
    };

    result.unwrap_or_else(|e| {
        warn!("Text extraction failed for {}: {e:#}", path.display());
        String::new()
    })
}

fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).context("Failed to read PDF")?;
    let pages =
        pdf_extract::extract_text_from_mem_by_pages(&bytes).context("Failed to parse PDF")?;
    Ok(join_pages(&pages))
}

/// Trims each page and drops the blank ones.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn extract_docx(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).context("Failed to read DOCX")?;
    let docx = docx_rs::read_docx(&bytes).context("Failed to parse DOCX")?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let mut text = String::new();
            for pc in &p.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Python\nDocker\n").unwrap();
        assert_eq!(extract_text_from_file(&path), "Python\nDocker\n");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# Skills").unwrap();
        assert_eq!(extract_text_from_file(&path), "# Skills");
    }

    #[test]
    fn test_invalid_utf8_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert_eq!(extract_text_from_file(&path), "");
    }

    #[test]
    fn test_missing_file_is_empty() {
        assert_eq!(extract_text_from_file(Path::new("/nonexistent/cv.txt")), "");
    }

    #[test]
    fn test_corrupt_documents_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["cv.pdf", "cv.DOCX"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"definitely not a document").unwrap();
            assert_eq!(extract_text_from_file(&path), "", "{name}");
        }
    }

    #[test]
    fn test_docx_paragraphs_joined() {
        use docx_rs::{Docx, Paragraph, Run};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        let file = std::fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Python, "))
                    .add_run(Run::new().add_text("AWS")),
            )
            .build()
            .pack(file)
            .unwrap();

        assert_eq!(extract_text_from_file(&path), "Jane Doe\nPython, AWS");
    }

    /// Writes a PDF with one page per entry; `None` is a page without content.
    fn write_pdf(path: &Path, pages: &[Option<&str>]) {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_pdf_pages_joined_by_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        write_pdf(&path, &[Some("Alpha"), Some("Beta")]);
        assert_eq!(extract_text_from_file(&path), "Alpha\nBeta");
    }

    #[test]
    fn test_pdf_blank_pages_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        write_pdf(&path, &[Some("Python"), None, Some("Docker")]);
        assert_eq!(extract_text_from_file(&path), "Python\nDocker");
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let pages = vec!["\n\npage one".to_string(), "  \n".to_string(), "page three\n".into()];
        assert_eq!(join_pages(&pages), "page one\npage three");
    }

    #[tokio::test]
    async fn test_async_extract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, "Rust").unwrap();
        assert_eq!(extract_text(path).await, "Rust");
    }
}
