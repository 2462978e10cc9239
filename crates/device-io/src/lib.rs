pub mod display;
pub mod drive;

pub use display::{run_adapter_demo, LcdAdapter, LcdPanel, OledAdapter, OledPanel, TextDisplay};
pub use drive::{
    run_bridge_demo, Bus, CanController, DriveMotor, MotorController, PwmController,
    UartController,
};
