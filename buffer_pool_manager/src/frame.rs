//! Per-frame metadata.

use common::{FileHandle, PageId, INVALID_PAGE_NUMBER};

/// Index into the frame table, `0 <= id < N`.
pub type FrameId = usize;

/// Metadata tracked for one resident (or empty) frame.
#[derive(Debug, Clone)]
pub(crate) struct FrameDescriptor {
    pub frame_no: FrameId,
    pub file: Option<FileHandle>,
    pub page_no: PageId,
    pub valid: bool,
    pub dirty: bool,
    pub refbit: bool,
    pub pin_cnt: u32,
}

impl FrameDescriptor {
    pub fn empty(frame_no: FrameId) -> Self {
        Self {
            frame_no,
            file: None,
            page_no: INVALID_PAGE_NUMBER,
            valid: false,
            dirty: false,
            refbit: false,
            pin_cnt: 0,
        }
    }

    /// Initializes the descriptor after a page has been loaded into its slot.
    pub fn set(&mut self, file: FileHandle, page_no: PageId) {
        self.file = Some(file);
        self.page_no = page_no;
        self.valid = true;
        self.dirty = false;
        self.refbit = true;
        self.pin_cnt = 1;
    }

    /// Resets the descriptor to the unused state.
    pub fn clear(&mut self) {
        self.file = None;
        self.page_no = INVALID_PAGE_NUMBER;
        self.valid = false;
        self.dirty = false;
        self.refbit = false;
        self.pin_cnt = 0;
    }

    pub fn owned_by(&self, file: &FileHandle) -> bool {
        self.valid && self.file.as_ref() == Some(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DiskManager;

    fn handle(path: &str) -> FileHandle {
        FileHandle::new(DiskManager::new(path).unwrap())
    }

    #[test]
    fn set_initializes_pinned_and_referenced() {
        let mut desc = FrameDescriptor::empty(0);
        let file = handle("/tmp/bpm_frame_set.db");
        desc.set(file.clone(), 7);
        assert!(desc.valid);
        assert!(!desc.dirty);
        assert!(desc.refbit);
        assert_eq!(desc.pin_cnt, 1);
        assert_eq!(desc.page_no, 7);
        assert!(desc.owned_by(&file));
        let _ = std::fs::remove_file("/tmp/bpm_frame_set.db");
    }

    #[test]
    fn clear_resets_to_unused_state() {
        let mut desc = FrameDescriptor::empty(1);
        let file = handle("/tmp/bpm_frame_clear.db");
        desc.set(file, 3);
        desc.dirty = true;
        desc.clear();
        assert!(!desc.valid);
        assert!(!desc.dirty);
        assert!(!desc.refbit);
        assert_eq!(desc.pin_cnt, 0);
        assert_eq!(desc.page_no, INVALID_PAGE_NUMBER);
        assert!(desc.file.is_none());
        let _ = std::fs::remove_file("/tmp/bpm_frame_clear.db");
    }
}
