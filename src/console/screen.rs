//! Per-platform screen clearing.
//!
//! The platform table is looked up once, when the binary starts, and the
//! resulting [`ScreenConfig`] is handed to whoever draws the board.

use crate::config::ClearScreen;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use derive_more::{Display, Error};
use std::io::{self, Write};
use std::process::Command;
use tracing::{debug, instrument, warn};

/// A way of clearing the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMethod {
    /// Run an external command that clears the terminal.
    Command {
        /// Program to run.
        program: &'static str,
        /// Arguments passed to the program.
        args: &'static [&'static str],
    },
    /// Write terminal escape sequences to the output stream.
    Ansi,
}

/// Clear commands keyed by `std::env::consts::OS`.
const PLATFORM_CLEAR: &[(&str, ClearMethod)] = &[
    (
        "linux",
        ClearMethod::Command {
            program: "clear",
            args: &[],
        },
    ),
    (
        "macos",
        ClearMethod::Command {
            program: "clear",
            args: &[],
        },
    ),
    (
        "windows",
        ClearMethod::Command {
            program: "cmd",
            args: &["/c", "cls"],
        },
    ),
];

/// The host platform has no registered clear command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unsupported platform: {}", platform)]
pub struct ScreenError {
    /// Platform identifier that was looked up.
    pub platform: String,
}

/// Resolved screen-clearing capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    platform: String,
    method: ClearMethod,
}

impl ScreenConfig {
    /// Looks up the clear command for the running platform.
    pub fn detect() -> Result<Self, ScreenError> {
        Self::for_platform(std::env::consts::OS)
    }

    /// Looks up the clear command registered for `platform`.
    #[instrument]
    pub fn for_platform(platform: &str) -> Result<Self, ScreenError> {
        let method = PLATFORM_CLEAR
            .iter()
            .find(|(name, _)| *name == platform)
            .map(|(_, method)| *method)
            .ok_or_else(|| ScreenError {
                platform: platform.to_string(),
            })?;

        debug!(?method, "Clear method resolved");
        Ok(Self {
            platform: platform.to_string(),
            method,
        })
    }

    /// Escape-sequence clearing, available on every platform.
    pub fn ansi() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            method: ClearMethod::Ansi,
        }
    }

    /// Builds the configuration selected by a [`ClearScreen`] setting.
    pub fn from_setting(setting: ClearScreen) -> Result<Self, ScreenError> {
        match setting {
            ClearScreen::Auto => Self::detect(),
            ClearScreen::Ansi => Ok(Self::ansi()),
        }
    }

    /// Platform this configuration was resolved for.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The resolved clear method.
    pub fn method(&self) -> ClearMethod {
        self.method
    }

    /// Clears the screen.
    ///
    /// Pending output in `out` is flushed first. A clear command that fails
    /// to run is logged and otherwise ignored; the game stays playable with
    /// a scrolling display.
    pub fn clear<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.flush()?;
        match self.method {
            ClearMethod::Command { program, args } => {
                match Command::new(program).args(args).status() {
                    Ok(status) if !status.success() => {
                        warn!(program, %status, "Clear command exited with failure");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(program, error = %e, "Clear command could not run"),
                }
            }
            ClearMethod::Ansi => {
                queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
