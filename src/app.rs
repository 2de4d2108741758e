use std::error::Error;
use std::fmt;
use std::io::Write;

use log::{debug, error, info};

use crate::config::{Config, ConfigError};
use crate::painter::FrameBuffer;
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayError {
    Init(String),
    WindowCreation(String),
}

impl DisplayError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Writes the diagnostic to `out` regardless of the log filter and
    /// returns the process exit code.
    pub fn report<W: Write>(&self, out: &mut W) -> i32 {
        error!("{}", self);
        // nothing else can be done if the diagnostic stream is gone
        let _ = writeln!(out, "{}", self);
        self.exit_code()
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "could not initialize display: {}", msg),
            Self::WindowCreation(msg) => write!(f, "failed to create window: {}", msg),
        }
    }
}

impl Error for DisplayError {}

impl From<ConfigError> for DisplayError {
    fn from(e: ConfigError) -> Self {
        Self::Init(e.to_string())
    }
}

/// A window that shows one frame and reports when the user wants out.
pub trait Surface {
    fn open(&mut self, title: &str, width: usize, height: usize) -> Result<(), DisplayError>;
    fn present(&mut self, frame: FrameBuffer) -> Result<(), DisplayError>;
    fn poll_event(&mut self) -> Result<Option<Event>, DisplayError>;
    fn close(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    WindowReady,
    FrameRendered,
    EventLoop,
    Terminated,
}

pub struct App {
    config: Config,
    phase: Phase,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            matches!(
                (self.phase, next),
                (Phase::Uninitialized, Phase::WindowReady)
                    | (Phase::WindowReady, Phase::FrameRendered)
                    | (Phase::FrameRendered, Phase::EventLoop)
                    | (Phase::EventLoop, Phase::Terminated)
            ),
            "illegal transition {:?} -> {:?}",
            self.phase,
            next
        );
        debug!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Opens the window, renders once, presents once, then waits for quit.
    pub fn run<S: Surface>(&mut self, surface: &mut S) -> Result<(), DisplayError> {
        self.config.validate()?;
        let Config {
            title,
            width,
            height,
            ..
        } = &self.config;
        surface.open(title, *width, *height)?;
        self.advance(Phase::WindowReady);

        let frame = render(&self.config);
        self.advance(Phase::FrameRendered);

        surface.present(frame)?;
        self.advance(Phase::EventLoop);

        loop {
            match surface.poll_event()? {
                Some(Event::Quit) => break,
                Some(Event::Other) | None => (),
            }
        }
        info!("quit requested");
        surface.close();
        self.advance(Phase::Terminated);
        Ok(())
    }
}
