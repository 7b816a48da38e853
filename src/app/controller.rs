//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        log::debug!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::OpenImages { paths } => handlers::file_io::open_images(state, &paths)?,
            AppCommand::SaveRois { path } => handlers::file_io::save_rois(state, path)?,
            AppCommand::LoadRois { path } => handlers::file_io::load_rois(state, path)?,

            // === Zeichen-Gesten ===
            AppCommand::StartRoi { view, pos } => handlers::drawing::start(state, view, pos),
            AppCommand::ContinueRoi { pos } => handlers::drawing::continue_at(state, pos),
            AppCommand::ExtendRoi { pos } => handlers::drawing::extend(state, pos),
            AppCommand::StopRoi => handlers::drawing::stop(state)?,
            AppCommand::AbandonRoi => handlers::drawing::abandon(state),

            // === Viewport ===
            AppCommand::SetZoom { view, zoom } => handlers::view::set_zoom(state, view, zoom)?,
            AppCommand::SetCenter { view, pos } => handlers::view::set_center(state, view, pos)?,
            AppCommand::ResetCenter { view } => handlers::view::reset_center(state, view)?,

            // === Ansichten & Subsets ===
            AppCommand::SetActiveView { view } => handlers::view::set_active_view(state, view),
            AppCommand::SelectImage { view, index } => {
                handlers::view::select_image(state, view, index)
            }
            AppCommand::CreateSubset => handlers::view::create_subset(state)?,
            AppCommand::RemoveSubset { index } => handlers::view::remove_subset(state, index),
            AppCommand::SetSimultaneous { enabled } => {
                handlers::view::set_simultaneous(state, enabled)
            }

            // === Selektions-Einstellungen ===
            AppCommand::SetColorIndex { index } => {
                handlers::selection::set_color_index(state, index)
            }
            AppCommand::SetSelectionIndex { index } => {
                handlers::selection::set_selection_index(state, index)
            }
            AppCommand::SetAlpha { alpha } => handlers::selection::set_alpha(state, alpha),
            AppCommand::SetTransforms { transforms } => {
                handlers::selection::set_transforms(state, transforms)
            }
            AppCommand::ClearColor => handlers::selection::clear_color(state),
            AppCommand::ClearAll => handlers::selection::clear_all(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::file_io::apply_options(state, options),
        }

        Ok(())
    }
}
