use crate::core::types::Document;

/// Splits results into fixed-size pages, last page possibly shorter.
/// A zero page size yields no pages.
pub fn paginate(documents: &[Document], page_size: usize) -> Vec<Vec<Document>> {
    if page_size == 0 {
        return Vec::new();
    }
    documents
        .chunks(page_size)
        .map(|page| page.to_vec())
        .collect()
}
