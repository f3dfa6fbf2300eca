//! Host-owned parameter storage.
//!
//! In a rack host the module never owns its knob values: they live in an
//! indexed bank the host persists, automates and edits from the UI. The
//! module reads them every frame and may write some back (linked knobs,
//! ceiling override, attenuverter snapping).
//!
//! [`ParamBank`] is that seam. [`ParamStore`] is the default in-process
//! implementation, initialised from descriptor defaults and clamping every
//! write the way a host enforces declared ranges.

use crate::param_info::ParamDescriptor;

/// Indexed control storage injected into a module.
///
/// Implementations must tolerate out-of-range indices: reads return `0.0`
/// and writes are ignored.
pub trait ParamBank {
    /// Number of slots in the bank.
    fn len(&self) -> usize;

    /// Returns `true` when the bank has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the raw value at `index`.
    fn value(&self, index: usize) -> f32;

    /// Write the value at `index`.
    fn set_value(&mut self, index: usize, value: f32);
}

/// Fixed-size bank backed by an array, bounded by a descriptor table.
///
/// # Example
///
/// ```rust
/// use vclamp_core::{ParamBank, ParamStore, CLAMP_PARAMS};
///
/// let mut bank = ParamStore::new(&CLAMP_PARAMS);
/// assert_eq!(bank.value(0), 10.0); // Max defaults to +10 V
/// bank.set_value(0, 50.0);
/// assert_eq!(bank.value(0), 10.0); // clamped to the declared range
/// ```
#[derive(Debug, Clone)]
pub struct ParamStore<const N: usize> {
    values: [f32; N],
    descriptors: &'static [ParamDescriptor; N],
}

impl<const N: usize> ParamStore<N> {
    /// Create a bank holding every descriptor's default value.
    pub fn new(descriptors: &'static [ParamDescriptor; N]) -> Self {
        Self {
            values: core::array::from_fn(|i| descriptors[i].default),
            descriptors,
        }
    }

    /// Descriptor for slot `index`.
    pub fn descriptor(&self, index: usize) -> Option<&ParamDescriptor> {
        self.descriptors.get(index)
    }

    /// Restore every slot to its default.
    pub fn reset_to_defaults(&mut self) {
        for (value, desc) in self.values.iter_mut().zip(self.descriptors.iter()) {
            *value = desc.default;
        }
    }

    /// Snapshot of all raw values.
    pub fn values(&self) -> &[f32; N] {
        &self.values
    }
}

impl<const N: usize> ParamBank for ParamStore<N> {
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn value(&self, index: usize) -> f32 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    #[inline]
    fn set_value(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = self.descriptors[index].clamp(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_info::ParamId;

    static TABLE: [ParamDescriptor; 2] = [
        ParamDescriptor::volts("A", "A", -1.0, 1.0, 0.5).with_id(ParamId(1), "a"),
        ParamDescriptor::toggle("B", "B", 1.0).with_id(ParamId(2), "b"),
    ];

    #[test]
    fn starts_at_defaults() {
        let bank = ParamStore::new(&TABLE);
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        assert_eq!(bank.values(), &[0.5, 1.0]);
    }

    #[test]
    fn writes_are_clamped() {
        let mut bank = ParamStore::new(&TABLE);
        bank.set_value(0, -3.0);
        assert_eq!(bank.value(0), -1.0);
        bank.set_value(1, 0.0);
        assert_eq!(bank.value(1), 0.0);
    }

    #[test]
    fn stepped_writes_are_rounded() {
        let mut bank = ParamStore::new(&TABLE);
        bank.set_value(1, 0.3);
        assert_eq!(bank.value(1), 0.0);
        bank.set_value(1, 0.6);
        assert_eq!(bank.value(1), 1.0);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut bank = ParamStore::new(&TABLE);
        bank.set_value(7, 1.0);
        assert_eq!(bank.value(7), 0.0);
        assert_eq!(bank.values(), &[0.5, 1.0]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut bank = ParamStore::new(&TABLE);
        bank.set_value(0, -0.25);
        bank.set_value(1, 0.0);
        bank.reset_to_defaults();
        assert_eq!(bank.values(), &[0.5, 1.0]);
        assert_eq!(bank.descriptor(0).map(|d| d.string_id), Some("a"));
    }
}
