//! The parallel array of `N` frame descriptors.

use crate::frame::{FrameDescriptor, FrameId};
use common::FileHandle;
use std::ops::{Index, IndexMut};

pub(crate) struct FrameTable {
    descriptors: Vec<FrameDescriptor>,
}

impl FrameTable {
    pub fn new(num_bufs: usize) -> Self {
        Self {
            descriptors: (0..num_bufs).map(FrameDescriptor::empty).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Frame ids currently resident for the given file, in ascending order.
    pub fn frames_for_file(&self, file: &FileHandle) -> Vec<FrameId> {
        (0..self.descriptors.len())
            .filter(|&id| self.descriptors[id].owned_by(file))
            .collect()
    }
}

impl Index<FrameId> for FrameTable {
    type Output = FrameDescriptor;

    fn index(&self, id: FrameId) -> &Self::Output {
        &self.descriptors[id]
    }
}

impl IndexMut<FrameId> for FrameTable {
    fn index_mut(&mut self, id: FrameId) -> &mut Self::Output {
        &mut self.descriptors[id]
    }
}
