use crate::device::Device;
use crate::profile::{self, Profile};
use crate::visitor::{VisitContext, Visitor};
use log::debug;
use rand::{Rng, RngCore};
use std::io;

/// Draw a reading on the profile's grid: `min + k * step` for `k` in `0..steps`.
fn sample(profile: &Profile, rng: &mut dyn RngCore) -> f64 {
    let k = rng.gen_range(0..profile.steps());
    profile.quantize(profile.min + f64::from(k) * profile.step)
}

/// Simulated motor reporting its shaft speed in RPM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Motor {
    running: bool,
    rpm: f64,
}

impl Motor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rpm(&self) -> f64 {
        self.rpm
    }
}

impl Device for Motor {
    fn activate(&mut self, rng: &mut dyn RngCore) {
        self.running = true;
        self.rpm = sample(&profile::MOTOR, rng);
        debug!("motor running at {} rpm", self.rpm);
    }

    fn deactivate(&mut self) {
        self.running = false;
        self.rpm = 0.0;
        debug!("motor stopped");
    }

    fn is_active(&self) -> bool {
        self.running
    }

    fn measurement(&self) -> f64 {
        self.rpm
    }

    fn profile(&self) -> &'static Profile {
        &profile::MOTOR
    }
}

/// Simulated sensor holding its last sampled value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sensor {
    active: bool,
    last_value: f64,
}

impl Sensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

impl Device for Sensor {
    fn activate(&mut self, rng: &mut dyn RngCore) {
        self.active = true;
        self.last_value = sample(&profile::SENSOR, rng);
        debug!("sensor sampled {}", self.last_value);
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.last_value = 0.0;
        debug!("sensor stopped");
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn measurement(&self) -> f64 {
        self.last_value
    }

    fn profile(&self) -> &'static Profile {
        &profile::SENSOR
    }
}

/// Any hardware the console can drive.
#[derive(Debug, Clone, PartialEq)]
pub enum Hardware {
    Motor(Motor),
    Sensor(Sensor),
}

impl Hardware {
    /// The standard rig: one motor followed by one sensor.
    pub fn default_rig() -> Vec<Hardware> {
        vec![Hardware::Motor(Motor::new()), Hardware::Sensor(Sensor::new())]
    }

    /// Hand this device to `visitor` as its concrete variant.
    pub fn accept(
        &mut self,
        visitor: &dyn Visitor,
        ctx: &mut VisitContext<'_>,
    ) -> io::Result<()> {
        match self {
            Self::Motor(m) => visitor.visit_motor(m, ctx),
            Self::Sensor(s) => visitor.visit_sensor(s, ctx),
        }
    }
}

impl From<Motor> for Hardware {
    fn from(motor: Motor) -> Self {
        Self::Motor(motor)
    }
}

impl From<Sensor> for Hardware {
    fn from(sensor: Sensor) -> Self {
        Self::Sensor(sensor)
    }
}

impl Device for Hardware {
    fn activate(&mut self, rng: &mut dyn RngCore) {
        match self {
            Self::Motor(m) => m.activate(rng),
            Self::Sensor(s) => s.activate(rng),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Motor(m) => m.deactivate(),
            Self::Sensor(s) => s.deactivate(),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Self::Motor(m) => m.is_active(),
            Self::Sensor(s) => s.is_active(),
        }
    }

    fn measurement(&self) -> f64 {
        match self {
            Self::Motor(m) => m.measurement(),
            Self::Sensor(s) => s.measurement(),
        }
    }

    fn profile(&self) -> &'static Profile {
        match self {
            Self::Motor(m) => m.profile(),
            Self::Sensor(s) => s.profile(),
        }
    }
}
