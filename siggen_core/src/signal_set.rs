use serde::{Deserialize, Serialize};

use crate::waveform::Waveform;

/// Ordered collection of waveforms. Insertion order is display order and
/// summation order; the positional index is the only identity a waveform
/// has.
///
/// Removal during a display/regeneration pass is deferred: the UI calls
/// `mark_for_removal` while walking the set, and the frame loop calls
/// `sweep_removed` once the pass is over. That replaces the
/// erase-and-break-out-of-the-loop dance an owning-pointer collection
/// forces, and keeps the remaining waveforms in their original order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalSet {
    waveforms: Vec<Waveform>,
    #[serde(skip)]
    doomed: Vec<usize>,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a waveform; returns its index.
    pub fn add(&mut self, waveform: impl Into<Waveform>) -> usize {
        self.waveforms.push(waveform.into());
        self.waveforms.len() - 1
    }

    /// Remove immediately. Only safe outside an iteration pass.
    pub fn remove_at(&mut self, index: usize) -> Option<Waveform> {
        if index < self.waveforms.len() {
            Some(self.waveforms.remove(index))
        } else {
            None
        }
    }

    /// Queue a removal to be applied by the next `sweep_removed`.
    /// Out-of-range and duplicate indices are ignored.
    pub fn mark_for_removal(&mut self, index: usize) {
        if index < self.waveforms.len() && !self.doomed.contains(&index) {
            self.doomed.push(index);
        }
    }

    /// Apply queued removals, preserving the order of the survivors.
    /// Returns how many waveforms were dropped.
    pub fn sweep_removed(&mut self) -> usize {
        if self.doomed.is_empty() {
            return 0;
        }
        // Remove from the back so earlier indices stay valid.
        self.doomed.sort_unstable();
        self.doomed.dedup();
        let mut removed = 0;
        for &index in self.doomed.iter().rev() {
            // A direct remove_at between mark and sweep can shrink the set.
            if index < self.waveforms.len() {
                self.waveforms.remove(index);
                removed += 1;
            }
        }
        self.doomed.clear();
        removed
    }

    pub fn get(&self, index: usize) -> Option<&Waveform> {
        self.waveforms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Waveform> {
        self.waveforms.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }

    pub fn clear(&mut self) {
        self.waveforms.clear();
        self.doomed.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waveform> {
        self.waveforms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Waveform> {
        self.waveforms.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{PulseTrain, Sine, WhiteNoise};

    fn three_waveforms() -> SignalSet {
        let mut set = SignalSet::new();
        set.add(Sine::new(1.0, 0.0, 1.0));
        set.add(WhiteNoise::new(0.5));
        set.add(PulseTrain::new(2.0, 0.5, 1.0));
        set
    }

    #[test]
    fn add_returns_positional_index() {
        let mut set = SignalSet::new();
        assert_eq!(set.add(Sine::new(1.0, 0.0, 1.0)), 0);
        assert_eq!(set.add(WhiteNoise::new(1.0)), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deferred_removal_preserves_survivor_order() {
        let mut set = three_waveforms();

        // Mark the middle entry mid-pass; nothing moves until the sweep.
        for index in 0..set.len() {
            if index == 1 {
                set.mark_for_removal(index);
            }
            assert!(set.get(index).is_some());
        }
        assert_eq!(set.len(), 3);

        assert_eq!(set.sweep_removed(), 1);
        assert_eq!(set.len(), 2);
        assert!(matches!(set.get(0), Some(Waveform::Sine(_))));
        assert!(matches!(set.get(1), Some(Waveform::PulseTrain(_))));
    }

    #[test]
    fn duplicate_and_out_of_range_marks_are_ignored() {
        let mut set = three_waveforms();
        set.mark_for_removal(0);
        set.mark_for_removal(0);
        set.mark_for_removal(99);
        assert_eq!(set.sweep_removed(), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn sweep_with_multiple_marks() {
        let mut set = three_waveforms();
        set.mark_for_removal(2);
        set.mark_for_removal(0);
        assert_eq!(set.sweep_removed(), 2);
        assert_eq!(set.len(), 1);
        assert!(matches!(set.get(0), Some(Waveform::WhiteNoise(_))));
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut set = three_waveforms();
        assert!(set.remove_at(3).is_none());
        assert_eq!(set.len(), 3);
        assert!(set.remove_at(1).is_some());
        assert_eq!(set.len(), 2);
    }
}
