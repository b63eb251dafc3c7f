//! The public façade composing the frame table, page index, and replacer.

use crate::buffer_pool::BufferPool;
use crate::error::BufMgrError;
use crate::frame::FrameId;
use crate::frame_table::FrameTable;
use crate::page_index::PageIndex;
use crate::page_ref::PageRef;
use crate::replacer::ClockReplacer;
use common::{FileHandle, PagedFile, Page, PageId, INVALID_PAGE_NUMBER};
use std::cell::{RefCell, RefMut};
use std::fmt::Write as _;

struct BufMgrMeta {
    frames: FrameTable,
    index: PageIndex,
    replacer: ClockReplacer,
}

/// The buffer pool manager: a bounded, single-threaded cache of pages backed
/// by one or more [`common::PagedFile`] collaborators.
pub struct BufMgr {
    pool: BufferPool,
    meta: RefCell<BufMgrMeta>,
    num_bufs: usize,
}

impl BufMgr {
    /// Allocates a pool, frame table, and page index for `num_bufs` frames.
    ///
    /// # Panics
    /// Panics if `num_bufs == 0` (a zero-sized pool is an ill-formed
    /// configuration, not a runtime condition callers can recover from).
    pub fn new(num_bufs: u32) -> Self {
        assert!(num_bufs >= 1, "BufMgr requires at least one frame");
        let n = num_bufs as usize;
        Self {
            pool: BufferPool::new(n),
            meta: RefCell::new(BufMgrMeta {
                frames: FrameTable::new(n),
                index: PageIndex::with_capacity(n),
                replacer: ClockReplacer::new(n),
            }),
            num_bufs: n,
        }
    }

    pub(crate) fn pool_slot(&self, frame_id: FrameId) -> &RefCell<Page> {
        &self.pool[frame_id]
    }

    /// Fetches a page, pinning it. Installs the page index entry only after
    /// a miss's load has succeeded, so a failed read leaves no stale entry.
    pub fn read_page(&self, file: &FileHandle, page_no: PageId) -> Result<PageRef<'_>, BufMgrError> {
        let mut meta = self.meta.borrow_mut();

        if let Ok(frame_id) = meta.index.lookup(file, page_no) {
            meta.frames[frame_id].refbit = true;
            meta.frames[frame_id].pin_cnt += 1;
            return Ok(PageRef {
                mgr: self,
                frame_id,
                page_no,
            });
        }

        let frame_id = Self::evict(&mut meta, &self.pool)?;
        let loaded = file.read_page(page_no).map_err(BufMgrError::Io)?;
        *self.pool[frame_id].borrow_mut() = loaded;
        meta.index.insert(file.clone(), page_no, frame_id);
        meta.frames[frame_id].set(file.clone(), page_no);

        Ok(PageRef {
            mgr: self,
            frame_id,
            page_no,
        })
    }

    /// Unpins a resident page. A miss is tolerated silently; unpinning an
    /// already-unpinned resident page fails with `PageNotPinned`.
    pub fn unpin_page(&self, file: &FileHandle, page_no: PageId, dirty: bool) -> Result<(), BufMgrError> {
        let mut meta = self.meta.borrow_mut();
        let frame_id = match meta.index.lookup(file, page_no) {
            Ok(frame_id) => frame_id,
            Err(_) => return Ok(()),
        };

        let desc = &mut meta.frames[frame_id];
        if desc.pin_cnt == 0 {
            return Err(BufMgrError::PageNotPinned {
                filename: file.filename().to_string(),
                page_no,
                frame_id,
            });
        }

        desc.pin_cnt -= 1;
        if dirty {
            desc.dirty = true;
        }
        Ok(())
    }

    /// Allocates a new page in `file` and pins it.
    pub fn alloc_page(&self, file: &FileHandle) -> Result<(PageId, PageRef<'_>), BufMgrError> {
        let mut meta = self.meta.borrow_mut();
        let frame_id = Self::evict(&mut meta, &self.pool)?;

        let new_page = file.allocate_page().map_err(BufMgrError::Io)?;
        let page_no = new_page.page_number();
        *self.pool[frame_id].borrow_mut() = new_page;
        meta.index.insert(file.clone(), page_no, frame_id);
        meta.frames[frame_id].set(file.clone(), page_no);

        Ok((
            page_no,
            PageRef {
                mgr: self,
                frame_id,
                page_no,
            },
        ))
    }

    /// Disposes of a page. Non-resident pages are disposed silently; the
    /// caller is expected (but not checked) to hold no pin on it.
    pub fn dispose_page(&self, file: &FileHandle, page_no: PageId) -> Result<(), BufMgrError> {
        {
            let mut meta = self.meta.borrow_mut();
            if let Ok(frame_id) = meta.index.remove(file, page_no) {
                meta.frames[frame_id].clear();
            }
        }
        file.delete_page(page_no).map_err(BufMgrError::Io)
    }

    /// Flushes every resident, unpinned page of `file`, clearing its frame.
    /// Fails immediately (leaving already-processed frames flushed and
    /// cleared) on the first pinned or corrupted matching frame.
    pub fn flush_file(&self, file: &FileHandle) -> Result<(), BufMgrError> {
        let mut meta = self.meta.borrow_mut();
        for frame_id in meta.frames.frames_for_file(file) {
            let page_no = meta.frames[frame_id].page_no;

            if page_no == INVALID_PAGE_NUMBER {
                let desc = &meta.frames[frame_id];
                return Err(BufMgrError::BadBuffer {
                    frame_id,
                    dirty: desc.dirty,
                    valid: desc.valid,
                    refbit: desc.refbit,
                });
            }

            if meta.frames[frame_id].pin_cnt > 0 {
                return Err(BufMgrError::PagePinned {
                    filename: file.filename().to_string(),
                    page_no,
                    frame_id,
                });
            }

            if meta.frames[frame_id].dirty {
                file.write_page(&self.pool[frame_id].borrow()).map_err(BufMgrError::Io)?;
                meta.frames[frame_id].dirty = false;
            }

            let _ = meta.index.remove(file, page_no);
            meta.frames[frame_id].clear();
        }
        Ok(())
    }

    /// A diagnostic dump of pool size, clock hand position, and every
    /// frame's state. Not a stable, machine-readable format.
    pub fn print_self(&self) -> String {
        let meta = self.meta.borrow();
        let mut out = String::new();
        let _ = writeln!(out, "BufMgr: {} frames", self.num_bufs);
        for frame_id in 0..meta.frames.len() {
            let desc = &meta.frames[frame_id];
            let filename = desc.file.as_ref().map(|f| f.filename().to_string());
            let _ = writeln!(
                out,
                "  frame {frame_id}: valid={} page_no={} dirty={} refbit={} pin_cnt={} file={}",
                desc.valid,
                desc.page_no,
                desc.dirty,
                desc.refbit,
                desc.pin_cnt,
                filename.as_deref().unwrap_or("-"),
            );
        }
        out
    }

    /// Shared by `read_page` and `alloc_page`: ask the replacer for a victim
    /// frame, which has already written back its page and cleared its
    /// descriptor by the time it returns.
    fn evict(meta: &mut RefMut<'_, BufMgrMeta>, pool: &BufferPool) -> Result<FrameId, BufMgrError> {
        meta.replacer.alloc_frame(&mut meta.frames, pool, &mut meta.index)
    }
}

impl Drop for BufMgr {
    /// Writes back every valid, dirty frame. A leaked pin at this point is
    /// not an error: `PageRef`'s borrow on `&BufMgr` already makes it
    /// impossible to reach this `Drop` while a reference is still alive, so
    /// a nonzero `pin_cnt` here can only mean a caller forgot to call
    /// `unpin_page`, which is a caller bug, not ours to report.
    fn drop(&mut self) {
        let meta = self.meta.borrow();
        for frame_id in 0..meta.frames.len() {
            let desc = &meta.frames[frame_id];
            if desc.valid && desc.dirty {
                if let Some(file) = &desc.file {
                    let _ = file.write_page(&self.pool[frame_id].borrow());
                }
            }
        }
    }
}
