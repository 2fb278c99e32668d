use std::cell::OnceCell;

/// A value computed on first successful access and kept for the owner's lifetime.
///
/// Unlike a `String` that doubles as its own "not yet read" marker, an empty
/// value stored here counts as computed and is never looked up again. A failed
/// computation leaves the cell empty so the next access retries it.
#[derive(Debug)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value: T = init()?;
        Ok(self.cell.get_or_init(|| value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
