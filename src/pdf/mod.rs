mod document;

#[cfg(test)]
pub mod test_support;

pub use document::PdfDocument;
