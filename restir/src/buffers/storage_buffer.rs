use std::any;
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::{Error, Result};

/// Fixed-size, labelled buffer of plain-data items.
#[derive(Clone)]
pub struct StorageBuffer<T> {
    label: String,
    data: Vec<T>,
}

impl<T> StorageBuffer<T>
where
    T: Clone + Default,
{
    pub fn new(label: impl AsRef<str>, len: usize) -> Self {
        let label = label.as_ref();

        debug!(
            "Allocating storage buffer `{label}`; ty={}, len={len}",
            any::type_name::<T>(),
        );

        Self {
            label: label.to_owned(),
            data: vec![T::default(); len],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Overwrites this buffer with `data`, which must have exactly the same
    /// length.
    pub fn write(&mut self, data: &[T]) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::BufferSizeMismatch {
                name: self.label.clone(),
                expected: self.data.len(),
                actual: data.len(),
            });
        }

        self.data.clone_from_slice(data);

        Ok(())
    }
}

impl<T> Deref for StorageBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for StorageBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> std::fmt::Debug for StorageBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBuffer")
            .field("label", &self.label)
            .field("len", &self.data.len())
            .finish()
    }
}
