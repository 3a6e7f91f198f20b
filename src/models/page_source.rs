use crate::Error;
use std::path::Path;

/// Text of one page, or `None` when the page has no extractable text
/// (e.g. a scanned, image-only page).
pub type PageText = Option<String>;

/// Yields the pages of a paginated document, in order.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<PageText>, Error>;
}

/// Extracts page text from PDF files with `pdf_oxide`.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageSource;

#[cfg(feature = "pdf")]
impl PageSource for PdfPageSource {
    fn pages(&self, path: &Path) -> Result<Vec<PageText>, Error> {
        use log::warn;
        use pdf_oxide::document::PdfDocument;

        if !path.exists() {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "document not found"),
            ));
        }

        let mut document = PdfDocument::open(path).map_err(|err| {
            Error::ParserError(format!("Failed to open {}: {}", path.display(), err))
        })?;

        let page_count = document.page_count().map_err(|err| {
            Error::ParserError(format!(
                "Failed to read page count of {}: {}",
                path.display(),
                err
            ))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match document.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(Some(text)),
                Ok(_) => pages.push(None),
                Err(err) => {
                    warn!(
                        "Skipping page {} of {}: {}",
                        page_index + 1,
                        path.display(),
                        err
                    );
                    pages.push(None);
                }
            }
        }

        Ok(pages)
    }
}
