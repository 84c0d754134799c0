//! Resolve command - one calculate trigger over terminal elements

use resolution_solver::adapters::{PaneStyle, ResolutionSolver, TerminalInput, TerminalPane};
use resolution_solver::config::AppConfig;
use resolution_solver::core::services::{InputResolutionController, RenderOptions};
use resolution_solver::output::{OutputMode, ResolutionReport};

/// Validate and resolve a formula; exits with status 1 when it is invalid
pub fn resolve(formula: &str, markup: bool, config: &AppConfig, mode: OutputMode) -> anyhow::Result<()> {
    let render = if markup {
        config.render.options()
    } else {
        RenderOptions::plain()
    };

    let controller = InputResolutionController::new(
        ResolutionSolver::new(),
        TerminalInput::new(formula),
        TerminalPane::silent(PaneStyle::Status),
        TerminalPane::silent(PaneStyle::Plain),
        render,
    );
    let validity = controller.initialize()?;
    let outcome = controller.on_calculate_triggered()?;

    ResolutionReport::new(&validity, &outcome).render(mode);

    if !outcome.is_resolved() {
        if mode == OutputMode::Human
            && let Some(reason) = validity.reason()
        {
            eprintln!("{reason}");
        }
        std::process::exit(1);
    }
    Ok(())
}
