//! The `(file, pageNo) -> frameId` identity index.

use crate::frame::FrameId;
use common::{FileHandle, PageId};
use std::collections::HashMap;

/// Internal not-found signal. Never escapes the public `BufMgr` API:
/// callers that hit it treat it as a silent miss, except `flushFile`, which
/// never looks a key up and so can never observe it.
pub(crate) struct HashNotFound;

pub(crate) struct PageIndex {
    map: HashMap<(FileHandle, PageId), FrameId>,
}

impl PageIndex {
    /// `N` is the buffer pool size; the index is sized to roughly 1.2x that,
    /// independent of the pool itself, to keep expected probe cost O(1).
    pub fn with_capacity(num_bufs: usize) -> Self {
        let buckets = ((num_bufs as f64 * 1.2) as usize) + 1;
        Self {
            map: HashMap::with_capacity(buckets),
        }
    }

    /// Inserts a new mapping. Panics if the key is already present (every
    /// call site only inserts after confirming a miss, so a collision here
    /// means the uniqueness invariant, no two frames sharing a
    /// `(file, pageNo)`, has already been broken). Checked in release builds
    /// too, since a silent overwrite would corrupt the index undetected.
    pub fn insert(&mut self, file: FileHandle, page_no: PageId, frame_id: FrameId) {
        let previous = self.map.insert((file, page_no), frame_id);
        assert!(previous.is_none(), "PageIndex: duplicate key inserted");
    }

    pub fn lookup(&self, file: &FileHandle, page_no: PageId) -> Result<FrameId, HashNotFound> {
        self.map
            .get(&(file.clone(), page_no))
            .copied()
            .ok_or(HashNotFound)
    }

    pub fn remove(&mut self, file: &FileHandle, page_no: PageId) -> Result<FrameId, HashNotFound> {
        self.map
            .remove(&(file.clone(), page_no))
            .ok_or(HashNotFound)
    }
}
