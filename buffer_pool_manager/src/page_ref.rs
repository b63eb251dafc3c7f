//! The handle returned by `readPage`/`allocPage`.

use crate::buf_mgr::BufMgr;
use crate::frame::FrameId;
use common::{Page, PageId};
use std::cell::{Ref, RefMut};

/// A pinned reference to a resident page.
///
/// `PageRef` borrows the owning [`BufMgr`] for its whole lifetime, so the
/// borrow checker refuses to drop (or move out of) the manager while any
/// `PageRef` is alive. It does *not* hold a `Ref`/`RefMut` borrow of the
/// underlying frame continuously; `read`/`write` take one out for the
/// duration of a single access only. That is what lets a page's pin count
/// exceed 1 (two `PageRef`s for the same page, from two separate
/// `read_page` hits, can coexist) without tripping `RefCell`'s single-writer
/// rule, so long as the caller does not hold two overlapping accessors at
/// once (the single-threaded cooperative ordering contract forbids that
/// anyway).
///
/// Dropping a `PageRef` does **not** unpin the page. Callers must call
/// [`BufMgr::unpin_page`] explicitly; it takes no data, only a dirty flag,
/// because the mutation already happened through this handle.
pub struct PageRef<'a> {
    pub(crate) mgr: &'a BufMgr,
    pub(crate) frame_id: FrameId,
    pub(crate) page_no: PageId,
}

impl<'a> PageRef<'a> {
    pub fn page_number(&self) -> PageId {
        self.page_no
    }

    pub fn read(&self) -> Ref<'_, Page> {
        self.mgr.pool_slot(self.frame_id).borrow()
    }

    pub fn write(&self) -> RefMut<'_, Page> {
        self.mgr.pool_slot(self.frame_id).borrow_mut()
    }
}
