//! Menu-driven console front end for the Game of Life engine.
//!
//! The loop is generic over its input and output so it can be driven from a
//! terminal or from a test with an in-memory script.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use conway::{CycleDetector, GRID_SIZE, Simulation, Stats, render};
use rand::RngCore;
use thiserror::Error;
use tracing::{debug, info};

/// Upper bound on generations run by the open-ended auto mode.
pub const AUTO_LIMIT: u32 = 50;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Next,
    Auto,
    Pattern,
    Random,
    Edit,
    Reset,
    Stats,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let command = match input.trim().to_ascii_lowercase().as_str() {
            "1" | "show" | "display" => Self::Show,
            "2" | "next" | "step"    => Self::Next,
            "3" | "auto"             => Self::Auto,
            "4" | "pattern"          => Self::Pattern,
            "5" | "random"           => Self::Random,
            "6" | "edit"             => Self::Edit,
            "7" | "reset"            => Self::Reset,
            "8" | "stats"            => Self::Stats,
            "9" | "help"             => Self::Help,
            "0" | "quit" | "exit"    => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Pause between generations when a count is given; the open-ended mode
    /// waits twice as long.
    pub step_delay: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(500),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    sim: Simulation<GRID_SIZE>,
    cycles: CycleDetector,
    rng: Box<dyn RngCore>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self::with_rng(input, output, config, Box::new(rand::rng()))
    }

    pub fn with_rng(input: R, output: W, config: ConsoleConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            input,
            output,
            config,
            sim: Simulation::new(),
            cycles: CycleDetector::new(),
            rng,
        }
    }

    pub fn simulation(&self) -> &Simulation<GRID_SIZE> {
        &self.sim
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or input reaches end of file.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "=================================")?;
        writeln!(self.output, "   GAME OF LIFE - CONSOLE")?;
        writeln!(self.output, "=================================")?;
        writeln!(self.output)?;
        self.show_menu()?;

        loop {
            let Some(line) = self.prompt("Your choice: ")? else {
                info!("input closed, leaving console");
                return Ok(());
            };

            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "Invalid choice. Type '9' for help.")?;
                writeln!(self.output)?;
                continue;
            };
            debug!(?command, "console command");

            match command {
                Command::Show => self.display()?,
                Command::Next => {
                    self.sim.advance();
                    writeln!(self.output, "Next generation computed!")?;
                    self.display()?;
                }
                Command::Auto => self.run_auto()?,
                Command::Pattern => {
                    self.sim.reset();
                    self.sim.apply_preset();
                    writeln!(self.output, "Preset pattern applied!")?;
                    self.display()?;
                }
                Command::Random => {
                    self.sim.reset();
                    self.sim.randomize(self.rng.as_mut());
                    writeln!(self.output, "Grid randomized!")?;
                    self.display()?;
                }
                Command::Edit => self.edit_cell()?,
                Command::Reset => {
                    self.sim.reset();
                    writeln!(self.output, "Game reset!")?;
                    self.display()?;
                }
                Command::Stats => writeln!(self.output, "{}", Stats::of(&self.sim))?,
                Command::Help => self.show_menu()?,
                Command::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            }
            writeln!(self.output)?;
        }
    }

    fn show_menu(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "1. Show grid")?;
        writeln!(self.output, "2. Next generation")?;
        writeln!(self.output, "3. Auto mode")?;
        writeln!(self.output, "4. Preset pattern")?;
        writeln!(self.output, "5. Random grid")?;
        writeln!(self.output, "6. Edit a cell")?;
        writeln!(self.output, "7. Reset")?;
        writeln!(self.output, "8. Statistics")?;
        writeln!(self.output, "9. Help")?;
        writeln!(self.output, "0. Quit")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn display(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", render(&self.sim))?;
        Ok(())
    }

    /// Prints `text` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn run_auto(&mut self) -> Result<(), ConsoleError> {
        let Some(line) = self.prompt("Generations to run (0 = until stable): ")? else {
            return Ok(());
        };
        let Ok(requested) = line.parse::<u32>() else {
            writeln!(self.output, "Invalid number.")?;
            return Ok(());
        };

        let (limit, delay) = if requested == 0 {
            writeln!(self.output, "Running up to {AUTO_LIMIT} generations...")?;
            (AUTO_LIMIT, self.config.step_delay * 2)
        } else {
            (requested, self.config.step_delay)
        };

        self.cycles.clear();
        self.cycles.observe(&self.sim.snapshot());

        for _ in 0..limit {
            self.sim.advance();
            self.display()?;

            if self.sim.is_empty() {
                writeln!(self.output, "All cells died at generation {}.", self.sim.generation())?;
                break;
            }
            if self.cycles.observe(&self.sim.snapshot()) {
                writeln!(self.output, "Pattern repeats at generation {}.", self.sim.generation())?;
                break;
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    }

    fn edit_cell(&mut self) -> Result<(), ConsoleError> {
        self.display()?;
        let max = GRID_SIZE - 1;

        let Some(row) = self.prompt(&format!("Row (0-{max}): "))? else {
            return Ok(());
        };
        let Some(col) = self.prompt(&format!("Column (0-{max}): "))? else {
            return Ok(());
        };
        let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
            writeln!(self.output, "Invalid coordinates.")?;
            return Ok(());
        };
        if row > max || col > max {
            writeln!(self.output, "Invalid coordinates. Use 0-{max}.")?;
            return Ok(());
        }

        let Some(state) = self.prompt("New state (alive/dead or true/false): ")? else {
            return Ok(());
        };
        let alive = match state.to_ascii_lowercase().as_str() {
            "alive" | "true" | "1" => true,
            "dead" | "false" | "0" => false,
            _ => {
                writeln!(self.output, "Invalid state.")?;
                return Ok(());
            }
        };

        self.sim.set_cell(row, col, alive);
        writeln!(self.output, "Cell updated!")?;
        self.display()
    }
}
