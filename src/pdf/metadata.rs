//! PDF page counting

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::MergeError;

/// Count pages by reading the Count field from the Pages dictionary.
/// This is more reliable than get_pages() which doesn't handle nested page
/// trees.
fn count_pages_from_catalog(doc: &Document) -> Result<usize, MergeError> {
    let catalog_ref = doc
        .trailer
        .get(b"Root")
        .map_err(|_| MergeError::General("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(MergeError::General("Root is not a reference".to_string())),
    };

    let catalog_dict = match doc.get_object(catalog_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(MergeError::General("Catalog is not a dictionary".to_string())),
    };

    let pages_id = match catalog_dict.get(b"Pages") {
        Ok(Object::Reference(id)) => *id,
        Ok(_) => return Err(MergeError::General("Pages is not a reference".to_string())),
        Err(_) => return Err(MergeError::General("No Pages in catalog".to_string())),
    };

    let pages_dict = match doc.get_object(pages_id)? {
        Object::Dictionary(dict) => dict,
        _ => return Err(MergeError::General("Pages is not a dictionary".to_string())),
    };

    match pages_dict.get(b"Count") {
        Ok(Object::Integer(n)) => Ok(*n as usize),
        Ok(_) => Err(MergeError::General("Count is not an integer".to_string())),
        Err(_) => Err(MergeError::General("No Count in Pages".to_string())),
    }
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize, MergeError> {
    if !path.exists() {
        return Err(MergeError::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(MergeError::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}
