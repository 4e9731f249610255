use crate::page_range::PageSpan;
use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Copy the pages of `span` into a new document, keeping their order
    pub fn extract_span(&self, span: PageSpan) -> Result<Document> {
        let total = self.page_count();
        if span.is_empty() || span.end > total {
            anyhow::bail!(
                "Pages {} are out of range (1-{}) in {}",
                span.display_range(),
                total,
                self.path
            );
        }

        let mut new_doc = self.doc.clone();

        // Page numbers outside the span, 1-based
        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .iter()
            .map(|(num, _)| *num)
            .filter(|num| *num <= span.start || *num > span.end)
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            new_doc.prune_objects();
        }

        Ok(new_doc)
    }

    /// Serialize `doc` to `path`. The file handle is closed before this returns.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        doc.save_to(&mut writer)
            .with_context(|| format!("Failed to save PDF: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to save PDF: {}", path.display()))?;
        Ok(())
    }
}
