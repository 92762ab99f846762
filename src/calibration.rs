use crate::{MagOffset, RawMagneticField};

/// Hard-iron offset estimation from min/max tracking.
///
/// Feed it raw measurements taken while the sensor is rotated through all
/// orientations, with the offset registers cleared. The center of the
/// measured range on each axis is the hard-iron offset.
///
/// ```
/// use lis2mdl::{HardIronEstimator, MagOffset, RawMagneticField};
///
/// let mut estimator = HardIronEstimator::new();
/// estimator.add_sample(RawMagneticField { x: -100, y: 50, z: 10 });
/// estimator.add_sample(RawMagneticField { x: 300, y: 150, z: -30 });
/// assert_eq!(Some(MagOffset::new(100, 100, -10)), estimator.offset());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardIronEstimator {
    min: [i16; 3],
    max: [i16; 3],
    count: u32,
}

impl HardIronEstimator {
    /// Create an empty estimator.
    pub const fn new() -> Self {
        HardIronEstimator {
            min: [i16::MAX; 3],
            max: [i16::MIN; 3],
            count: 0,
        }
    }

    /// Add a raw measurement.
    pub fn add_sample(&mut self, sample: RawMagneticField) {
        let values = [sample.x, sample.y, sample.z];
        for (axis, value) in values.iter().enumerate() {
            self.min[axis] = self.min[axis].min(*value);
            self.max[axis] = self.max[axis].max(*value);
        }
        self.count = self.count.saturating_add(1);
    }

    /// Number of samples added so far.
    pub fn sample_count(&self) -> u32 {
        self.count
    }

    /// Current offset estimate, `None` if no sample was added yet.
    pub fn offset(&self) -> Option<MagOffset> {
        if self.count == 0 {
            return None;
        }
        let center = |axis: usize| {
            ((i32::from(self.max[axis]) + i32::from(self.min[axis])) / 2) as i16
        };
        Some(MagOffset::new(center(0), center(1), center(2)))
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HardIronEstimator {
    fn default() -> Self {
        Self::new()
    }
}
