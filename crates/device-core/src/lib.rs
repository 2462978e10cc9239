pub mod command;
pub mod console;
pub mod device;
pub mod hardware;
pub mod profile;
pub mod visitor;

pub use command::{Command, UnknownCommand};
pub use console::{Console, ConsoleConfig, ConsoleError, LoopState, SessionStats};
pub use device::Device;
pub use hardware::{Hardware, Motor, Sensor};
pub use profile::Profile;
pub use visitor::{DiagFormat, Diagnostic, Reading, Runner, Status, Stopper, VisitContext, Visitor};
