//! The clock (second-chance) replacement policy.

use crate::buffer_pool::BufferPool;
use crate::error::BufMgrError;
use crate::frame::FrameId;
use crate::frame_table::FrameTable;
use crate::page_index::PageIndex;
use common::PagedFile;

/// A cursor over the frame table implementing the second-chance sweep.
pub(crate) struct ClockReplacer {
    clock_hand: usize,
    num_bufs: usize,
}

impl ClockReplacer {
    /// The hand starts at `N - 1` so the first advance lands on frame 0.
    pub fn new(num_bufs: usize) -> Self {
        Self {
            clock_hand: num_bufs.saturating_sub(1),
            num_bufs,
        }
    }

    fn advance(&mut self) -> FrameId {
        self.clock_hand = (self.clock_hand + 1) % self.num_bufs;
        self.clock_hand
    }

    /// Selects and clears a victim frame, writing back its page first if it
    /// was dirty. Fails with `BufferExceeded` if every frame is pinned.
    pub fn alloc_frame(
        &mut self,
        frames: &mut FrameTable,
        pool: &BufferPool,
        index: &mut PageIndex,
    ) -> Result<FrameId, BufMgrError> {
        // N+1 iterations give every initially-set refbit one chance to be
        // cleared and revisited on a second pass.
        for _ in 0..=self.num_bufs {
            let frame_id = self.advance();

            if !frames[frame_id].valid {
                frames[frame_id].clear();
                return Ok(frame_id);
            }

            if frames[frame_id].refbit {
                frames[frame_id].refbit = false;
                continue;
            }

            if frames[frame_id].pin_cnt > 0 {
                continue;
            }

            // Evictable: valid, unreferenced, unpinned.
            let file = frames[frame_id]
                .file
                .clone()
                .expect("valid frame must have a file");
            let page_no = frames[frame_id].page_no;
            let dirty = frames[frame_id].dirty;

            let _ = index.remove(&file, page_no);
            if dirty {
                file.write_page(&pool[frame_id].borrow()).map_err(BufMgrError::Io)?;
            }

            frames[frame_id].clear();
            return Ok(frame_id);
        }

        Err(BufMgrError::BufferExceeded)
    }
}
