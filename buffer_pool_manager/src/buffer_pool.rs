//! The fixed-size array of `N` page-sized slots.

use crate::frame::FrameId;
use common::Page;
use std::cell::RefCell;
use std::ops::Index;

/// One `RefCell` per slot, rather than one `RefCell` around the whole pool,
/// so that two different frames can be borrowed (and held by two different
/// `PageRef`s) at the same time without tripping each other's borrow.
pub(crate) struct BufferPool {
    slots: Vec<RefCell<Page>>,
}

impl BufferPool {
    pub fn new(num_bufs: usize) -> Self {
        Self {
            slots: (0..num_bufs).map(|_| RefCell::new(Page::default())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl Index<FrameId> for BufferPool {
    type Output = RefCell<Page>;

    fn index(&self, id: FrameId) -> &Self::Output {
        &self.slots[id]
    }
}
