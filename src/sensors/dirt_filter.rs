//! Dirt filter capacity sensor.
//!
//! Reports how much of the filter is still free, as a percentage.
//! A fresh filter reads 100 %.  Readings are clamped to 0-100 on write.

pub const FRESH_FILTER_PERCENT: f32 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct DirtFilterSensor {
    capacity_percent: f32,
}

impl DirtFilterSensor {
    pub fn new(capacity_percent: f32) -> Self {
        let mut s = Self {
            capacity_percent: FRESH_FILTER_PERCENT,
        };
        s.set_capacity(capacity_percent);
        s
    }

    /// Overwrite the reading.  NaN is passed through so callers can
    /// exercise a faulty sensor.
    pub fn set_capacity(&mut self, percent: f32) {
        self.capacity_percent = if percent.is_nan() {
            percent
        } else {
            percent.clamp(0.0, FRESH_FILTER_PERCENT)
        };
    }

    /// Reduce remaining capacity by `percent`.
    pub fn clog(&mut self, percent: f32) {
        self.set_capacity(self.capacity_percent - percent);
    }

    /// Fit a clean filter.
    pub fn replace(&mut self) {
        self.capacity_percent = FRESH_FILTER_PERCENT;
    }

    pub fn capacity(&self) -> f32 {
        self.capacity_percent
    }
}

impl Default for DirtFilterSensor {
    fn default() -> Self {
        Self::new(FRESH_FILTER_PERCENT)
    }
}
