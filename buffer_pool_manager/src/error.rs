//! The buffer manager's public error type.

use crate::frame::FrameId;
use common::PageId;
use std::fmt;
use std::io;

/// Errors the public `BufMgr` surface can return.
#[derive(Debug)]
pub enum BufMgrError {
    /// Every frame is pinned; `allocFrame` had nowhere to evict from.
    BufferExceeded,
    /// `unPinPage` targeted a resident page whose pin count was already zero.
    PageNotPinned {
        filename: String,
        page_no: PageId,
        frame_id: FrameId,
    },
    /// `flushFile` found a resident page of the target file still pinned.
    PagePinned {
        filename: String,
        page_no: PageId,
        frame_id: FrameId,
    },
    /// `flushFile` found a resident frame of the target file carrying the
    /// invalid page number sentinel (a corrupted descriptor).
    BadBuffer {
        frame_id: FrameId,
        dirty: bool,
        valid: bool,
        refbit: bool,
    },
    /// An I/O failure surfaced unchanged from the `PagedFile` collaborator.
    Io(io::Error),
}

impl fmt::Display for BufMgrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufMgrError::BufferExceeded => {
                write!(f, "buffer pool exceeded: no frame available for eviction")
            }
            BufMgrError::PageNotPinned {
                filename,
                page_no,
                frame_id,
            } => write!(
                f,
                "page {page_no} of {filename} is not pinned (frame {frame_id})"
            ),
            BufMgrError::PagePinned {
                filename,
                page_no,
                frame_id,
            } => write!(
                f,
                "page {page_no} of {filename} is still pinned (frame {frame_id})"
            ),
            BufMgrError::BadBuffer {
                frame_id,
                dirty,
                valid,
                refbit,
            } => write!(
                f,
                "frame {frame_id} has an invalid page number (valid={valid}, dirty={dirty}, refbit={refbit})"
            ),
            BufMgrError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for BufMgrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufMgrError::Io(err) => Some(err),
            _ => None,
        }
    }
}
