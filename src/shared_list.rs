use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::command_list::CommandList;

/// A thread-safe handle to a [`CommandList`], wrapping it in an `Arc<Mutex<_>>`.
///
/// `CommandList` itself does no locking. Callers that edit one list from several threads or
/// event handlers share it through this handle so edits and undos run one at a time.
///
/// # Examples
///
/// ```
/// use command_list::prelude::{CommandList, SharedCommandList};
///
/// let shared = SharedCommandList::new(CommandList::new(vec![1, 2], 5));
/// let handle = shared.clone();
///
/// std::thread::spawn(move || handle.modify(|list| list.add_item(3)))
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.lock().items(), [1, 2, 3]);
/// shared.modify(CommandList::undo);
/// assert_eq!(shared.lock().items(), [1, 2]);
/// ```
///
/// # Methods
///
/// * `new(list: CommandList<T>) -> Self` - Wraps the list.
/// * `lock(&self) -> MutexGuard<'_, CommandList<T>>` - Locks the list. Blocks if it is already locked.
/// * `try_lock(&self) -> Option<MutexGuard<'_, CommandList<T>>>` - Returns `None` if the list is already locked.
/// * `modify<F, R>(&self, f: F) -> R` - Runs the closure with the list locked and returns its result.
/// * `into_inner(self) -> Result<CommandList<T>, Self>` - Unwraps the list if this is the last handle.
pub struct SharedCommandList<T> {
    inner: Arc<Mutex<CommandList<T>>>,
}

impl<T> SharedCommandList<T> {
    pub fn new(list: CommandList<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, CommandList<T>> {
        self.inner.lock()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn try_lock(&self) -> Option<MutexGuard<'_, CommandList<T>>> {
        self.inner.try_lock()
    }

    pub fn modify<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CommandList<T>) -> R,
    {
        let mut list = self.lock();
        f(&mut *list)
    }

    /// Consumes the handle and returns the list.
    ///
    /// # Errors
    ///
    /// Returns the handle back when other clones of it are still alive.
    pub fn into_inner(self) -> Result<CommandList<T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T> Clone for SharedCommandList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedCommandList<T> {
    fn default() -> Self {
        Self::new(CommandList::default())
    }
}

impl<T> std::fmt::Debug for SharedCommandList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(list) => write!(f, "SharedCommandList({:?})", list.items()),
            None => write!(f, "SharedCommandList(<locked>)"),
        }
    }
}

impl<T> From<CommandList<T>> for SharedCommandList<T> {
    fn from(list: CommandList<T>) -> Self {
        Self::new(list)
    }
}
