//! PDF concatenation using lopdf
//!
//! Sources are appended one at a time into an in-memory accumulator; the
//! merged document is only assembled and written once every append has
//! succeeded, so a failed merge never leaves a partial file on disk.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::MergeError;

/// In-memory accumulator for a merge in progress.
///
/// Each appended document is renumbered above the running max object id so
/// object ids never collide, then its pages and objects are collected. Page
/// order across appends is the append order.
#[derive(Debug)]
pub struct MergeAccumulator {
    max_id: u32,
    page_ids: Vec<ObjectId>,
    objects: BTreeMap<ObjectId, Object>,
}

impl Default for MergeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeAccumulator {
    pub fn new() -> Self {
        Self {
            max_id: 1,
            page_ids: Vec::new(),
            objects: BTreeMap::new(),
        }
    }

    /// Load one source PDF and append its pages to the accumulator.
    ///
    /// Returns the number of pages appended. Fails if the file is missing,
    /// cannot be parsed, or contains no pages; the accumulator is left as it
    /// was before the call on the parse/missing paths, but callers are
    /// expected to discard it after any error.
    pub fn append_file(&mut self, path: &Path) -> Result<usize, MergeError> {
        if !path.exists() {
            return Err(MergeError::FileNotFound(path.to_path_buf()));
        }

        let mut doc = Document::load(path)?;

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(MergeError::EmptyPdf(path.to_path_buf()));
        }

        // Renumber objects in this document to avoid conflicts
        doc.renumber_objects_with(self.max_id);
        self.max_id = doc.max_id + 1;

        let pages = doc.get_pages();
        let appended = pages.len();
        self.page_ids.extend(pages.into_iter().map(|(_, id)| id));
        self.objects.extend(doc.objects);

        Ok(appended)
    }

    /// Total number of pages collected so far
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// True until the first successful append
    pub fn is_empty(&self) -> bool {
        self.page_ids.is_empty()
    }

    /// Assemble the merged document and write it to `output`.
    ///
    /// Consumes the accumulator; all held objects are released when this
    /// returns, on success and failure alike.
    pub fn write(self, output: &Path) -> Result<(), MergeError> {
        let Self {
            max_id,
            page_ids,
            objects,
        } = self;

        let mut merged = Document::with_version("1.5");
        merged.objects.extend(objects);

        // new_object_id() hands out ids above max_id; without this the
        // catalog and pages nodes would collide with collected objects
        merged.max_id = max_id - 1;

        let pages_id = merged.new_object_id();

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));

        let catalog_id = merged.new_object_id();
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));

        merged.objects.insert(catalog_id, Object::Dictionary(catalog));
        merged.objects.insert(pages_id, Object::Dictionary(pages_dict));
        merged.trailer.set("Root", Object::Reference(catalog_id));

        // Every collected page still points at its old parent node
        for &page_id in &page_ids {
            if let Ok(Object::Dictionary(dict)) = merged.get_object_mut(page_id) {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }

        merged.compress();
        merged.save(output)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new_accumulator_is_empty() {
        let acc = MergeAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.page_count(), 0);
    }

    #[test]
    fn test_append_missing_file() {
        let mut acc = MergeAccumulator::new();
        let result = acc.append_file(Path::new("does-not-exist.pdf"));

        assert!(matches!(
            result,
            Err(MergeError::FileNotFound(ref p)) if p == &PathBuf::from("does-not-exist.pdf")
        ));
        assert!(acc.is_empty());
    }

    // Round trips against real documents live in tests/integration.rs
}
