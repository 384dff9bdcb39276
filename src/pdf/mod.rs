//! Thin wrapper around lopdf for page-by-page text access.
//!
//! No semantic interpretation happens here; recognition over the text lives
//! in `crate::extract`.

pub mod tables;

use std::path::Path;

use lopdf::Document;

use crate::utils::error::Result;

pub struct PdfDocument {
    doc: Document,
    page_count: usize,
}

impl PdfDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(path)?;
        let page_count = doc.get_pages().len();
        Ok(Self { doc, page_count })
    }

    pub fn load_mem(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        let page_count = doc.get_pages().len();
        Ok(Self { doc, page_count })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Text of the zero-based page `index`. Out-of-range indices yield `None`
    /// rather than an error; source documents vary in length.
    pub fn page_text(&self, index: usize) -> Result<Option<String>> {
        if index >= self.page_count {
            return Ok(None);
        }
        // lopdf numbers pages from 1.
        let text = self.doc.extract_text(&[(index + 1) as u32])?;
        Ok(Some(text))
    }

    /// Texts of the zero-based pages `start..end`, clamped to the available
    /// page count. One string per page, in page order.
    pub fn texts_in_range(&self, start: usize, end: usize) -> Result<Vec<String>> {
        let start = start.min(self.page_count);
        let end = end.min(self.page_count);

        let mut texts = Vec::with_capacity(end.saturating_sub(start));
        for index in start..end {
            let text = self.doc.extract_text(&[(index + 1) as u32])?;
            texts.push(text);
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    // Builds a minimal PDF with one page per entry, each page carrying a
    // single line of ASCII text.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
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
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_page_count_and_text() {
        let bytes = build_pdf(&["SEMESTRE 3", "pagina dos"]);
        let pdf = PdfDocument::load_mem(&bytes).unwrap();

        assert_eq!(pdf.page_count(), 2);
        let first = pdf.page_text(0).unwrap().unwrap();
        assert!(first.contains("SEMESTRE 3"));
    }

    #[test]
    fn test_out_of_range_page_is_none() {
        let bytes = build_pdf(&["unica pagina"]);
        let pdf = PdfDocument::load_mem(&bytes).unwrap();

        assert!(pdf.page_text(5).unwrap().is_none());
    }

    #[test]
    fn test_range_is_clamped() {
        let bytes = build_pdf(&["uno", "dos"]);
        let pdf = PdfDocument::load_mem(&bytes).unwrap();

        // Window beyond the document shrinks instead of erroring.
        let texts = pdf.texts_in_range(1, 7).unwrap();
        assert_eq!(texts.len(), 1);

        let texts = pdf.texts_in_range(5, 7).unwrap();
        assert!(texts.is_empty());
    }
}
