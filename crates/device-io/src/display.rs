//! Vendor display panels behind a single text-display interface.
//!
//! `LcdPanel` and `OledPanel` stand in for driver crates whose APIs we do not
//! control. The adapters own a panel and expose it as a [`TextDisplay`].

use std::io::{self, Write};
use tracing::debug;

pub trait TextDisplay {
    fn init(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn display(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct LcdPanel {
    powered: bool,
}

impl LcdPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.powered = true;
        writeln!(out, "init lcd")
    }

    pub fn display(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "display lcd: {text}")
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }
}

#[derive(Debug, Default)]
pub struct OledPanel {
    powered: bool,
}

impl OledPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.powered = true;
        writeln!(out, "init oled")
    }

    pub fn display(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "display oled: {text}")
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }
}

#[derive(Debug)]
pub struct LcdAdapter {
    lcd: LcdPanel,
}

impl LcdAdapter {
    pub fn new(lcd: LcdPanel) -> Self {
        Self { lcd }
    }

    pub fn panel(&self) -> &LcdPanel {
        &self.lcd
    }
}

impl TextDisplay for LcdAdapter {
    fn init(&mut self, out: &mut dyn Write) -> io::Result<()> {
        debug!("initialising lcd through adapter");
        self.lcd.init(out)
    }

    fn display(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        self.lcd.display(text, out)
    }
}

#[derive(Debug)]
pub struct OledAdapter {
    oled: OledPanel,
}

impl OledAdapter {
    pub fn new(oled: OledPanel) -> Self {
        Self { oled }
    }

    pub fn panel(&self) -> &OledPanel {
        &self.oled
    }
}

impl TextDisplay for OledAdapter {
    fn init(&mut self, out: &mut dyn Write) -> io::Result<()> {
        debug!("initialising oled through adapter");
        self.oled.init(out)
    }

    fn display(&mut self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        self.oled.display(text, out)
    }
}

/// Initialise both displays, then show one line on each.
pub fn run_adapter_demo(out: &mut dyn Write) -> io::Result<()> {
    let mut lcd: Box<dyn TextDisplay> = Box::new(LcdAdapter::new(LcdPanel::new()));
    let mut oled: Box<dyn TextDisplay> = Box::new(OledAdapter::new(OledPanel::new()));

    lcd.init(out)?;
    oled.init(out)?;

    lcd.display("Text 1", out)?;
    oled.display("Text 2", out)
}
