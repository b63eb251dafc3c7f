//! The fixed-size unit of disk and memory transfer.

/// A unique identifier for a page within a file.
///
/// Signed so that [`INVALID_PAGE_NUMBER`] can be a sentinel distinct from any
/// page number a file layer will ever assign (file layers assign `0, 1, 2, ...`).
pub type PageId = i32;

/// Sentinel page id the buffer manager recognizes to detect a corrupted
/// frame descriptor during `flushFile`.
pub const INVALID_PAGE_NUMBER: PageId = -1;

/// The size of a single page in bytes.
pub const PAGE_SIZE: usize = 4096;

/// A fixed-size page payload carrying its own page number.
#[derive(Clone)]
pub struct Page {
    page_no: PageId,
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    /// Creates a new zeroed page with the given page number.
    pub fn new(page_no: PageId) -> Self {
        Self {
            page_no,
            data: Box::new([0u8; PAGE_SIZE]),
        }
    }

    pub fn page_number(&self) -> PageId {
        self.page_no
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(INVALID_PAGE_NUMBER)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("page_no", &self.page_no)
            .field("bytes", &self.data.len())
            .finish()
    }
}
