//! Operations applied across the hardware rig.
//!
//! Each visitor has one entry point per hardware variant; [`Hardware::accept`]
//! picks the right one. Adding an operation means adding a visitor, adding a
//! variant means adding one method here.
//!
//! [`Hardware::accept`]: crate::hardware::Hardware::accept

use crate::device::Device;
use crate::hardware::{Motor, Sensor};
use rand::RngCore;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// How [`Diagnostic`] renders a reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for DiagFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(other.to_string()),
        }
    }
}

/// Everything a visitor may touch besides the device itself.
pub struct VisitContext<'a> {
    pub rng: &'a mut dyn RngCore,
    pub out: &'a mut dyn Write,
    pub format: DiagFormat,
}

impl<'a> VisitContext<'a> {
    pub fn new(rng: &'a mut dyn RngCore, out: &'a mut dyn Write) -> Self {
        Self {
            rng,
            out,
            format: DiagFormat::default(),
        }
    }

    pub fn with_format(mut self, format: DiagFormat) -> Self {
        self.format = format;
        self
    }
}

pub trait Visitor {
    fn visit_motor(&self, motor: &mut Motor, ctx: &mut VisitContext<'_>) -> io::Result<()>;
    fn visit_sensor(&self, sensor: &mut Sensor, ctx: &mut VisitContext<'_>) -> io::Result<()>;
}

/// Starts every device.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

impl Visitor for Runner {
    fn visit_motor(&self, motor: &mut Motor, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        motor.activate(ctx.rng);
        Ok(())
    }

    fn visit_sensor(&self, sensor: &mut Sensor, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        sensor.activate(ctx.rng);
        Ok(())
    }
}

/// Stops every device. Only the motor announces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopper;

impl Visitor for Stopper {
    fn visit_motor(&self, motor: &mut Motor, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        motor.deactivate();
        writeln!(ctx.out, "Motor is stopped")
    }

    fn visit_sensor(&self, sensor: &mut Sensor, _ctx: &mut VisitContext<'_>) -> io::Result<()> {
        sensor.deactivate();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Running,
    Stopped,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("Running"),
            Self::Stopped => f.write_str("Stopped"),
        }
    }
}

/// One line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub hardware: &'static str,
    pub status: Status,
    pub label: &'static str,
    pub value: f64,
}

impl Reading {
    pub fn of(device: &dyn Device) -> Self {
        let profile = device.profile();
        Self {
            hardware: profile.name,
            status: if device.is_active() {
                Status::Running
            } else {
                Status::Stopped
            },
            label: profile.label,
            value: device.measurement(),
        }
    }

    pub fn write_to(&self, out: &mut dyn Write, format: DiagFormat) -> io::Result<()> {
        match format {
            DiagFormat::Text => writeln!(out, "{self}"),
            DiagFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                out.write_all(b"\n")
            }
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hardware: {}, status: {}, {}: {}",
            self.hardware, self.status, self.label, self.value
        )
    }
}

/// Takes a fresh reading from every device and reports it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostic;

impl Diagnostic {
    fn report(device: &mut dyn Device, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        device.activate(ctx.rng);
        Reading::of(device).write_to(ctx.out, ctx.format)
    }
}

impl Visitor for Diagnostic {
    fn visit_motor(&self, motor: &mut Motor, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        Self::report(motor, ctx)
    }

    fn visit_sensor(&self, sensor: &mut Sensor, ctx: &mut VisitContext<'_>) -> io::Result<()> {
        Self::report(sensor, ctx)
    }
}
