//! Motor drive split from the bus that carries its commands.
//!
//! [`DriveMotor`] only knows the [`MotorController`] interface; the CAN, UART
//! and PWM controllers can be swapped without touching it.

use std::fmt;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Can,
    Uart,
    Pwm,
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Can => "CAN",
            Self::Uart => "UART",
            Self::Pwm => "PWM",
        })
    }
}

pub trait MotorController {
    fn bus(&self) -> Bus;
    fn start_motor(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn set_speed(&mut self, speed: i32, out: &mut dyn Write) -> io::Result<()>;
    fn stop_motor(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

macro_rules! bus_controller {
    ($name:ident, $bus:expr) => {
        #[derive(Debug, Default)]
        pub struct $name {
            speed: i32,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn speed(&self) -> i32 {
                self.speed
            }
        }

        impl MotorController for $name {
            fn bus(&self) -> Bus {
                $bus
            }

            fn start_motor(&mut self, out: &mut dyn Write) -> io::Result<()> {
                writeln!(out, "init {} motor", self.bus())
            }

            fn set_speed(&mut self, speed: i32, out: &mut dyn Write) -> io::Result<()> {
                self.speed = speed;
                writeln!(out, "set speed {} motor: {}", self.bus(), speed)
            }

            fn stop_motor(&mut self, out: &mut dyn Write) -> io::Result<()> {
                self.speed = 0;
                writeln!(out, "stop {} motor", self.bus())
            }
        }
    };
}

bus_controller!(CanController, Bus::Can);
bus_controller!(UartController, Bus::Uart);
bus_controller!(PwmController, Bus::Pwm);

pub struct DriveMotor {
    controller: Box<dyn MotorController>,
}

impl DriveMotor {
    pub fn new(controller: Box<dyn MotorController>) -> Self {
        Self { controller }
    }

    pub fn bus(&self) -> Bus {
        self.controller.bus()
    }

    pub fn start_motor(&mut self, out: &mut dyn Write) -> io::Result<()> {
        debug!(bus = %self.bus(), "starting motor");
        self.controller.start_motor(out)
    }

    pub fn set_speed(&mut self, speed: i32, out: &mut dyn Write) -> io::Result<()> {
        debug!(bus = %self.bus(), speed, "setting speed");
        self.controller.set_speed(speed, out)
    }

    pub fn stop_motor(&mut self, out: &mut dyn Write) -> io::Result<()> {
        debug!(bus = %self.bus(), "stopping motor");
        self.controller.stop_motor(out)
    }
}

impl fmt::Debug for DriveMotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriveMotor").field("bus", &self.bus()).finish()
    }
}

/// Start three motors on different buses, set their speeds, then stop them.
pub fn run_bridge_demo(out: &mut dyn Write) -> io::Result<()> {
    let mut motors = [
        (DriveMotor::new(Box::new(CanController::new())), 20),
        (DriveMotor::new(Box::new(UartController::new())), 70),
        (DriveMotor::new(Box::new(PwmController::new())), 100),
    ];

    for (motor, _) in motors.iter_mut() {
        motor.start_motor(out)?;
    }
    for (motor, speed) in motors.iter_mut() {
        motor.set_speed(*speed, out)?;
    }
    for (motor, _) in motors.iter_mut() {
        motor.stop_motor(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_tracks_speed() {
        let mut out = Vec::new();
        let mut pwm = PwmController::new();
        pwm.set_speed(55, &mut out).unwrap();
        assert_eq!(pwm.speed(), 55);
        pwm.stop_motor(&mut out).unwrap();
        assert_eq!(pwm.speed(), 0);
    }

    #[test]
    fn drive_motor_delegates_to_its_bus() {
        let mut out = Vec::new();
        let mut motor = DriveMotor::new(Box::new(UartController::new()));
        assert_eq!(motor.bus(), Bus::Uart);
        motor.set_speed(-5, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "set speed UART motor: -5\n");
    }
}
