use crate::command::Command;
use crate::hardware::Hardware;
use crate::visitor::{DiagFormat, VisitContext};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Clone, Debug, Default)]
pub struct ConsoleConfig {
    /// Fixed seed for reproducible readings; entropy when `None`.
    pub seed: Option<u64>,
    pub diag_format: DiagFormat,
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SessionStats {
    pub commands_dispatched: u64,
    pub unknown_commands: u64,
    pub starts: u64,
    pub stops: u64,
    pub diagnostics: u64,
}

impl SessionStats {
    fn record(&mut self, command: Command) {
        self.commands_dispatched += 1;
        match command {
            Command::Start => self.starts += 1,
            Command::Stop => self.stops += 1,
            Command::Diag => self.diagnostics += 1,
            Command::Exit => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    WaitingForInput,
    Dispatching(Command),
    Terminated,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("console already terminated")]
    Terminated,
}

/// Read-dispatch-print loop over a fixed hardware rig.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    out: W,
    rig: Vec<Hardware>,
    rng: StdRng,
    config: ConsoleConfig,
    stats: SessionStats,
    state: LoopState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W, config: ConsoleConfig) -> Self {
        Self::with_rig(reader, out, config, Hardware::default_rig())
    }

    pub fn with_rig(reader: R, out: W, config: ConsoleConfig, rig: Vec<Hardware>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            reader,
            out,
            rig,
            rng,
            config,
            stats: SessionStats::default(),
            state: LoopState::WaitingForInput,
        }
    }

    /// Print the banner and process tokens until `exit` or end of input.
    pub fn run(&mut self) -> Result<&SessionStats, ConsoleError> {
        writeln!(self.out, "{}", Command::banner())?;
        self.out.flush()?;

        // Raw bytes: a token that is not UTF-8 is just another unknown command.
        let mut line = Vec::new();
        while self.state != LoopState::Terminated {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                debug!("end of input");
                self.state = LoopState::Terminated;
                break;
            }
            let tokens = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|t| !t.is_empty());
            for token in tokens {
                if self.handle(&String::from_utf8_lossy(token))? == LoopState::Terminated {
                    break;
                }
            }
            self.out.flush()?;
        }
        Ok(&self.stats)
    }

    /// Process a single input token and return the state it leaves the loop in.
    pub fn handle(&mut self, token: &str) -> Result<LoopState, ConsoleError> {
        if self.state == LoopState::Terminated {
            return Err(ConsoleError::Terminated);
        }
        match token.parse::<Command>() {
            Ok(command) => self.dispatch(command)?,
            Err(err) => {
                info!("{err}");
                self.stats.unknown_commands += 1;
                writeln!(self.out, "Unknown command")?;
            }
        }
        Ok(self.state)
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        self.state = LoopState::Dispatching(command);
        debug!("dispatching {command}");
        self.stats.record(command);

        if let Some(line) = command.announcement() {
            writeln!(self.out, "{line}")?;
        }

        let Some(visitor) = command.visitor() else {
            self.state = LoopState::Terminated;
            return Ok(());
        };

        let mut ctx =
            VisitContext::new(&mut self.rng, &mut self.out).with_format(self.config.diag_format);
        for hw in self.rig.iter_mut() {
            hw.accept(visitor, &mut ctx)?;
        }

        self.state = LoopState::WaitingForInput;
        Ok(())
    }

    pub fn rig(&self) -> &[Hardware] {
        &self.rig
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let config = ConsoleConfig {
            seed: Some(11),
            ..Default::default()
        };
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn unknown_token_leaves_rig_untouched() {
        let mut c = console("");
        c.handle("start").unwrap();
        let before = c.rig().to_vec();
        let out_len = c.out.len();
        assert_eq!(c.handle("bogus").unwrap(), LoopState::WaitingForInput);
        assert_eq!(c.rig(), before.as_slice());
        assert_eq!(&c.out[out_len..], b"Unknown command\n");
        assert_eq!(c.stats().unknown_commands, 1);
    }

    #[test]
    fn exit_terminates() {
        let mut c = console("");
        assert_eq!(c.handle("exit").unwrap(), LoopState::Terminated);
        assert!(matches!(c.handle("start"), Err(ConsoleError::Terminated)));
    }

    #[test]
    fn full_session() {
        let mut c = console("start\ndiag\nstop\nexit\nstart\n");
        let stats = c.run().unwrap().clone();
        assert_eq!(stats.commands_dispatched, 4);
        assert_eq!(stats.starts, 1);
        assert!(c.rig().iter().all(|hw| !hw.is_active()));

        let out = output(c);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Available commands: start || stop || diag || exit");
        assert_eq!(lines[1], "Start Devices");
        assert!(lines[2].starts_with("Hardware: Motor, status: Running, current Rpm: "));
        assert!(lines[3].starts_with("Hardware: Sensor, status: Running, lastValue: "));
        assert_eq!(&lines[4..], ["Stop Devices", "Motor is stopped", "Exit Program"]);
    }

    #[test]
    fn tokens_on_one_line_run_in_order() {
        let mut c = console("  start   stop \n\n exit start");
        c.run().unwrap();
        let out = output(c);
        assert_eq!(
            out.lines().skip(1).collect::<Vec<_>>(),
            ["Start Devices", "Stop Devices", "Motor is stopped", "Exit Program"]
        );
    }

    #[test]
    fn invalid_utf8_is_an_unknown_command() {
        let input = b"start\n\xff\xfe\ndiag \xff exit\n".to_vec();
        let config = ConsoleConfig {
            seed: Some(11),
            ..Default::default()
        };
        let mut c = Console::new(Cursor::new(input), Vec::new(), config);
        let stats = c.run().unwrap().clone();
        assert_eq!(stats.unknown_commands, 2);
        assert_eq!(stats.commands_dispatched, 3);
        assert_eq!(c.state(), LoopState::Terminated);

        let out = output(c);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1..3], ["Start Devices", "Unknown command"]);
        assert!(lines[3].starts_with("Hardware: Motor"));
        assert!(lines[4].starts_with("Hardware: Sensor"));
        assert_eq!(lines[5..], ["Unknown command", "Exit Program"]);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let mut c = console("start\n");
        c.run().unwrap();
        assert_eq!(c.state(), LoopState::Terminated);
        assert!(c.rig().iter().all(|hw| hw.is_active()));
        assert!(!output(c).contains("Exit Program"));
    }

    #[test]
    fn same_seed_same_readings() {
        let run = || {
            let mut c = console("diag diag exit");
            c.run().unwrap();
            output(c)
        };
        assert_eq!(run(), run());
    }
}
