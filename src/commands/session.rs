//! Session command - drive the controller interactively
//!
//! Every plain line replaces the input text and fires an input-change
//! event. A line starting with `+` appends a new line to the input instead.
//! `:calc` triggers the calculation, `:resize` re-fits the input box and
//! `:quit` ends the session.

use std::io::BufRead;

use resolution_solver::adapters::{PaneStyle, ResolutionSolver, TerminalInput, TerminalPane};
use resolution_solver::core::ports::BoxHeight;
use resolution_solver::core::services::{ControllerEvent, InputResolutionController, RenderOptions};
use resolution_solver::output::{OutputMode, ResizeReport, ResolutionReport, ValidationReport};

/// A line of session input
#[derive(Debug, PartialEq, Eq)]
enum SessionLine<'a> {
    Replace(&'a str),
    Append(&'a str),
    Calculate,
    Resize,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> SessionLine<'_> {
    match line.trim() {
        ":calc" | ":c" => SessionLine::Calculate,
        ":resize" => SessionLine::Resize,
        ":quit" | ":q" => SessionLine::Quit,
        command if command.starts_with(':') => SessionLine::Unknown(command),
        _ => line
            .strip_prefix('+')
            .map_or(SessionLine::Replace(line), SessionLine::Append),
    }
}

/// Run an interactive session on stdin
pub fn session(initial: &str, mode: OutputMode) -> anyhow::Result<()> {
    let echo = mode == OutputMode::Human;
    let pane = |style| {
        if echo {
            TerminalPane::echoing(style)
        } else {
            TerminalPane::silent(style)
        }
    };
    let controller = InputResolutionController::new(
        ResolutionSolver::new(),
        TerminalInput::new(initial),
        pane(PaneStyle::Status),
        pane(PaneStyle::Plain),
        RenderOptions::plain(),
    );

    let mut validity = controller.initialize()?;
    if !echo {
        ValidationReport::from(&validity).render(mode);
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match parse_line(&line) {
            SessionLine::Replace(text) => {
                controller.input().set_text(text);
            },
            SessionLine::Append(text) => {
                let current = controller.input().text();
                if current.is_empty() {
                    controller.input().set_text(text);
                } else {
                    controller.input().set_text(format!("{current}\n{text}"));
                }
            },
            SessionLine::Calculate => {
                let outcome = controller.on_calculate_triggered()?;
                if !echo {
                    ResolutionReport::new(&validity, &outcome).render(mode);
                }
                continue;
            },
            SessionLine::Resize => {
                controller.handle(ControllerEvent::Resized)?;
                if let BoxHeight::Pixels(rows) = controller.input().height() {
                    ResizeReport::new(rows).render(mode);
                }
                continue;
            },
            SessionLine::Quit => break,
            SessionLine::Unknown(command) => {
                log::warn!("unknown command: {command}");
                continue;
            },
        }
        validity = controller.on_input_changed()?;
        if !echo {
            ValidationReport::from(&validity).render(mode);
        }
    }

    Ok(())
}
