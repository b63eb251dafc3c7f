//! The collaborator contract the buffer manager loads and persists pages through.

use crate::page::{Page, PageId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::ops::Deref;
use std::rc::Rc;

/// A paged file the buffer manager reads from and writes to.
///
/// The buffer manager treats implementors as opaque, synchronous, and
/// non-reentrant: it never inspects file layout, only `(page_no) -> Page`
/// transfers.
pub trait PagedFile {
    fn read_page(&self, page_no: PageId) -> io::Result<Page>;
    fn write_page(&self, page: &Page) -> io::Result<()>;
    fn allocate_page(&self) -> io::Result<Page>;
    fn delete_page(&self, page_no: PageId) -> io::Result<()>;
    fn filename(&self) -> &str;
}

/// A non-owning, reference-counted handle to a [`PagedFile`].
///
/// Equality and hashing are by pointer identity, not by filename or content:
/// two handles are the same file only if they share the same allocation.
#[derive(Clone)]
pub struct FileHandle(Rc<dyn PagedFile>);

impl FileHandle {
    pub fn new(file: impl PagedFile + 'static) -> Self {
        Self(Rc::new(file))
    }
}

impl Deref for FileHandle {
    type Target = dyn PagedFile;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FileHandle {}

impl Hash for FileHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as *const () as usize).hash(state);
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileHandle({})", self.filename())
    }
}
