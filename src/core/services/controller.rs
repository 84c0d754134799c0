//! Input resolution controller
//!
//! Binds one text input, one validation indicator and one result area to a
//! [`SolverModule`]. Input changes refresh the indicator and re-fit the input
//! box; a calculate trigger re-validates the current text and renders either
//! the resolution or the fixed invalid-input message.
//!
//! All handlers are synchronous and run to completion. The controller never
//! caches a verdict: the text is validated again on every event.

use std::cell::RefCell;

use crate::core::models::{ControllerState, INVALID_INPUT_MESSAGE, Outcome, RESULT_PREFIX, Validity};
use crate::core::ports::{BoxHeight, InputField, PageError, ResultArea, SolverModule, ValidationIndicator};

use super::markup::RenderOptions;

/// Events the page delivers to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The input text was mutated
    InputChanged,
    /// The window was resized
    Resized,
    /// The calculate control was clicked
    CalculateClicked,
}

/// Drives the page elements from solver verdicts
#[derive(Debug)]
pub struct InputResolutionController<S, I, V, R> {
    solver: S,
    input: I,
    indicator: V,
    result: R,
    render: RenderOptions,
    state: RefCell<ControllerState>,
}

impl<S, I, V, R> InputResolutionController<S, I, V, R>
where
    S: SolverModule,
    I: InputField,
    V: ValidationIndicator,
    R: ResultArea,
{
    /// Create a controller over explicit page elements
    pub fn new(solver: S, input: I, indicator: V, result: R, render: RenderOptions) -> Self {
        Self {
            solver,
            input,
            indicator,
            result,
            render,
            state: RefCell::new(ControllerState::Idle),
        }
    }

    /// Reflect whatever text pre-populates the input
    ///
    /// Runs the input-change handler once so the indicator and the box
    /// height match the initial content.
    pub fn initialize(&self) -> Result<Validity, PageError> {
        log::debug!("initial validation pass");
        self.on_input_changed()
    }

    /// Dispatch a page event
    pub fn handle(&self, event: ControllerEvent) -> Result<(), PageError> {
        log::debug!("event: {event:?}");
        match event {
            ControllerEvent::InputChanged => self.on_input_changed().map(drop),
            ControllerEvent::Resized => self.on_resize(),
            ControllerEvent::CalculateClicked => self.on_calculate_triggered().map(drop),
        }
    }

    /// Validate the current text, show its status token and re-fit the box
    pub fn on_input_changed(&self) -> Result<Validity, PageError> {
        let text = self.input.value()?;
        let validity = self.solver.validate(&text);
        self.indicator.show_status(&self.render.render(&validity.token()))?;
        self.fit_input_height()?;
        Ok(validity)
    }

    /// Re-fit the box; indicator and result are left alone
    pub fn on_resize(&self) -> Result<(), PageError> {
        self.fit_input_height().map(drop)
    }

    /// Validate the current text again and render the outcome
    pub fn on_calculate_triggered(&self) -> Result<Outcome, PageError> {
        let text = self.input.value()?;
        let outcome = if self.solver.validate(&text).is_valid() {
            let resolution = self.solver.compute_resolution(&text);
            let markup = format!("{RESULT_PREFIX}{}", self.render.render(&resolution));
            log::info!("resolved input ({} bytes)", text.len());
            Outcome::Resolved { resolution, markup }
        } else {
            log::info!("rejected invalid input");
            Outcome::Rejected {
                markup: INVALID_INPUT_MESSAGE.to_string(),
            }
        };
        self.result.show(outcome.markup())?;
        *self.state.borrow_mut() = ControllerState::Displaying(outcome.clone());
        Ok(outcome)
    }

    /// Size the box to its content
    ///
    /// The height is reset to auto before measuring so the box can shrink.
    pub fn fit_input_height(&self) -> Result<u32, PageError> {
        self.input.set_height(BoxHeight::Auto)?;
        let height = self.input.scroll_height()?;
        self.input.set_height(BoxHeight::Pixels(height))?;
        log::trace!("input box height: {height}px");
        Ok(height)
    }

    /// What the result area currently shows
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    /// The solver in use
    pub const fn solver(&self) -> &S {
        &self.solver
    }

    /// The input element
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// The indicator element
    pub const fn indicator(&self) -> &V {
        &self.indicator
    }

    /// The result element
    pub const fn result_area(&self) -> &R {
        &self.result
    }
}
