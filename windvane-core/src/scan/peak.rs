//! Sweep bookkeeping
//!
//! Tracks the step count and the first position holding the maximum
//! reading. Positions count sweep steps, so the reading taken after the
//! first step sits at position 1.

/// Highest reading seen during a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Peak {
    /// Filtered sensor voltage
    pub reading: f32,
    /// Sweep step the reading was taken after (first step is 1)
    pub position: i32,
}

/// Running sweep statistics
///
/// Each call to [`observe`](Self::observe) corresponds to one sweep step
/// followed by one reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeakTracker {
    step_count: i32,
    peak: Option<Peak>,
}

impl PeakTracker {
    /// Create an empty tracker
    pub const fn new() -> Self {
        Self {
            step_count: 0,
            peak: None,
        }
    }

    /// Record the reading taken after one sweep step
    ///
    /// Returns true if this reading became the new peak. Only a strictly
    /// greater reading replaces the peak, so the earliest of equal maxima
    /// wins. NaN never becomes the peak once one exists.
    pub fn observe(&mut self, reading: f32) -> bool {
        self.step_count += 1;
        let position = self.step_count;

        let is_new_peak = match self.peak {
            None => true,
            Some(peak) => reading > peak.reading,
        };

        if is_new_peak {
            self.peak = Some(Peak { reading, position });
        }
        is_new_peak
    }

    /// Steps taken since the sweep started
    pub fn step_count(&self) -> i32 {
        self.step_count
    }

    /// Peak so far, None before the first reading
    pub fn peak(&self) -> Option<Peak> {
        self.peak
    }
}
