#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub label: &'static str,
    /// Lowest reading an active device can report.
    pub min: f64,
    /// Exclusive upper bound of the reading.
    pub max: f64,
    /// Spacing between consecutive readings.
    pub step: f64,
    /// Decimal places a reading is rounded to.
    pub precision: i32,
}

impl Profile {
    /// Number of distinct readings the device can produce.
    pub fn steps(&self) -> u32 {
        ((self.max - self.min) / self.step).round() as u32
    }

    /// Round `value` to the nearest reading representable with `precision` decimals.
    pub fn quantize(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision);
        (value * scale).round() / scale
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

pub const MOTOR: Profile = Profile {
    name: "Motor",
    label: "current Rpm",
    min: 1000.0,
    max: 2000.0,
    step: 1.0,
    precision: 0,
};

pub const SENSOR: Profile = Profile {
    name: "Sensor",
    label: "lastValue",
    min: 20.0,
    max: 40.0,
    step: 0.02,
    precision: 2,
};
