use std::cell::RefCell;

/// Interior-mutable slot for the sealed collections. Makes its owner `!Sync`.
pub(super) struct SealedCell<T>(RefCell<T>);

impl<T> SealedCell<T> {
    pub(super) fn new(inner: T) -> Self {
        Self(RefCell::new(inner))
    }

    /// Runs `f` with exclusive access to the contents. The cell is released when `f` returns or unwinds.
    ///
    /// # Panics
    /// If called again while `f` is running. Collection code never nests calls, so this only happens when
    /// element code invoked from `f` (`Clone`, `Debug`) reaches back into the owning collection.
    #[inline(always)]
    pub(super) fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut inner = self
            .0
            .try_borrow_mut()
            .unwrap_or_else(|_| panic!("sealed collection accessed from its own element's Clone or Debug"));
        f(&mut inner)
    }

    #[inline(always)]
    pub(super) fn get_mut(&mut self) -> &mut T {
        self.0.get_mut()
    }

    pub(super) fn into_inner(self) -> T {
        self.0.into_inner()
    }
}
