use crate::error::DataError;

/// Indexed collection of samples.
pub trait Dataset {
    /// The type of a single sample.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// `DataError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
