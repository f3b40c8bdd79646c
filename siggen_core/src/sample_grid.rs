use crate::signal_set::SignalSet;

/// Time axis plus per-waveform and summed amplitude buffers for the current
/// (sampling frequency, duration) window.
///
/// The grid is rebuilt and regenerated once per frame: `sample_count =
/// floor(sampling_freq * duration)`, `t[i] = i / sampling_freq`, and every
/// buffer is recomputed in full so in-frame parameter edits show up in the
/// same frame's plot and save. Buffers are reused across frames to avoid
/// reallocating at steady state.
#[derive(Debug, Clone, Default)]
pub struct SampleGrid {
    sampling_freq: u32,
    duration: f64,
    time: Vec<f64>,
    channels: Vec<Vec<f64>>,
    sum: Vec<f64>,
}

impl SampleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the time axis for the given window. A zero sampling
    /// frequency or non-positive duration yields an empty grid rather than
    /// an error; the frame loop keeps running either way.
    pub fn rebuild(&mut self, sampling_freq: u32, duration: f64) {
        let count = Self::sample_count_for(sampling_freq, duration);
        if sampling_freq == self.sampling_freq && duration == self.duration && self.time.len() == count
        {
            return;
        }
        self.sampling_freq = sampling_freq;
        self.duration = duration;
        self.time.clear();
        self.time
            .extend((0..count).map(|i| i as f64 / sampling_freq as f64));
    }

    /// Evaluate every waveform at every time index, caching each waveform's
    /// samples in its own buffer and accumulating the elementwise sum.
    /// O(sample_count * waveforms) per call.
    pub fn regenerate(&mut self, signals: &mut SignalSet) {
        let count = self.time.len();

        self.channels.resize_with(signals.len(), Vec::new);
        self.sum.clear();
        self.sum.resize(count, 0.0);

        for (channel, waveform) in self.channels.iter_mut().zip(signals.iter_mut()) {
            channel.clear();
            channel.reserve(count);
            for (i, &t) in self.time.iter().enumerate() {
                let sample = waveform.evaluate(t);
                channel.push(sample);
                self.sum[i] += sample;
            }
        }
    }

    fn sample_count_for(sampling_freq: u32, duration: f64) -> usize {
        if sampling_freq == 0 || duration <= 0.0 {
            return 0;
        }
        (sampling_freq as f64 * duration).floor() as usize
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    pub fn sampling_freq(&self) -> u32 {
        self.sampling_freq
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn time_axis(&self) -> &[f64] {
        &self.time
    }

    /// Cached samples for the waveform at `index`, in signal-set order.
    pub fn waveform_samples(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Elementwise sum of all waveform buffers.
    pub fn sum_samples(&self) -> &[f64] {
        &self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{PulseTrain, Sine, WhiteNoise};
    use float_cmp::approx_eq;
    use more_asserts::assert_gt;

    #[test]
    fn sample_count_is_floor_of_freq_times_duration() {
        let mut grid = SampleGrid::new();
        grid.rebuild(1000, 10.0);
        assert_eq!(grid.sample_count(), 10_000);

        grid.rebuild(3, 1.5);
        assert_eq!(grid.sample_count(), 4); // floor(4.5)

        grid.rebuild(44_100, 0.0101);
        assert_eq!(grid.sample_count(), 445); // floor(445.41)
    }

    #[test]
    fn time_axis_is_index_over_frequency() {
        let mut grid = SampleGrid::new();
        grid.rebuild(500, 2.0);
        let axis = grid.time_axis();
        assert_eq!(axis.len(), 1000);
        for (i, &t) in axis.iter().enumerate() {
            assert_eq!(t, i as f64 / 500.0);
        }
    }

    #[test]
    fn degenerate_window_yields_empty_grid() {
        let mut grid = SampleGrid::new();
        grid.rebuild(0, 10.0);
        assert_eq!(grid.sample_count(), 0);

        grid.rebuild(1000, -1.0);
        assert_eq!(grid.sample_count(), 0);

        let mut signals = SignalSet::new();
        signals.add(Sine::new(1.0, 0.0, 1.0));
        grid.regenerate(&mut signals);
        assert!(grid.sum_samples().is_empty());
        assert_eq!(grid.waveform_samples(0).unwrap().len(), 0);
    }

    #[test]
    fn sum_buffer_is_elementwise_sum_of_channels() {
        let mut signals = SignalSet::new();
        signals.add(Sine::new(3.0, 0.5, 1.2));
        signals.add(WhiteNoise::with_seed(0.4, 9));
        signals.add(PulseTrain::new(7.0, 0.3, 2.0));

        let mut grid = SampleGrid::new();
        grid.rebuild(1000, 1.0);
        grid.regenerate(&mut signals);

        let count = grid.sample_count();
        assert_gt!(count, 0);
        for i in 0..count {
            let expected: f64 = (0..signals.len())
                .map(|w| grid.waveform_samples(w).unwrap()[i])
                .sum();
            let actual = grid.sum_samples()[i];
            assert!(
                approx_eq!(f64, expected, actual, epsilon = 1e-12),
                "index {i}: {expected} vs {actual}"
            );
        }
    }

    #[test]
    fn buffers_track_signal_set_size() {
        let mut signals = SignalSet::new();
        signals.add(Sine::new(1.0, 0.0, 1.0));
        signals.add(Sine::new(2.0, 0.0, 1.0));

        let mut grid = SampleGrid::new();
        grid.rebuild(100, 1.0);
        grid.regenerate(&mut signals);
        assert!(grid.waveform_samples(1).is_some());

        signals.mark_for_removal(1);
        signals.sweep_removed();
        grid.regenerate(&mut signals);
        assert!(grid.waveform_samples(1).is_none());
        assert_eq!(grid.waveform_samples(0).unwrap().len(), 100);
    }

    #[test]
    fn empty_signal_set_sums_to_zero() {
        let mut signals = SignalSet::new();
        let mut grid = SampleGrid::new();
        grid.rebuild(100, 0.5);
        grid.regenerate(&mut signals);
        assert_eq!(grid.sum_samples().len(), 50);
        assert!(grid.sum_samples().iter().all(|&s| s == 0.0));
    }
}
