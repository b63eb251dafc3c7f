//! The single-threaded, clock-replacement Buffer Pool Manager.
//!
//! [`BufMgr`] is the public façade: `read_page`/`alloc_page` pin a page and
//! hand back a [`PageRef`], `unpin_page` releases it, `flush_file` and
//! `dispose_page` manage a file's residency. Everything else in this crate
//! (frame descriptors, the page index, the clock replacer, the pool's raw
//! storage) is an implementation detail reachable only through that façade.

mod buf_mgr;
mod buffer_pool;
mod error;
mod frame;
mod frame_table;
mod page_index;
mod page_ref;
mod replacer;

pub use buf_mgr::BufMgr;
pub use error::BufMgrError;
pub use frame::FrameId;
pub use page_ref::PageRef;
