//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::RoiTool;
use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{Transforms, ViewId, Viewport};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenImagesRequested { paths } => vec![
            AppCommand::AbandonRoi,
            AppCommand::OpenImages { paths },
        ],

        AppIntent::PointerPressed { view, pos, button } => {
            map_pointer_press(state, view, pos, button)
        }
        AppIntent::PointerMoved { view, pos } => match &state.gesture {
            Some(gesture) if gesture.view == view => vec![AppCommand::ExtendRoi { pos }],
            _ => vec![],
        },

        AppIntent::ScrollZoom { view, notches } => {
            let Some(set) = state.view(view) else {
                return vec![];
            };
            let zoom = (set.zoom() + notches * state.options.zoom_step).max(Viewport::ZOOM_MIN);
            vec![AppCommand::SetZoom { view, zoom }]
        }
        AppIntent::ZoomEntered { view, zoom } => vec![AppCommand::SetZoom { view, zoom }],
        AppIntent::ArrowKeyPressed { view, direction } => {
            let Some(set) = state.view(view) else {
                return vec![];
            };
            let pos = set.center() + direction.unit() * state.options.pan_step;
            vec![AppCommand::SetCenter { view, pos }]
        }
        AppIntent::OverviewClicked { view, pos } => vec![AppCommand::SetCenter { view, pos }],
        AppIntent::ResetCenterRequested { view } => vec![AppCommand::ResetCenter { view }],

        AppIntent::ActiveViewSelected { view } => vec![AppCommand::SetActiveView { view }],
        AppIntent::ImageSelected { view, index } => vec![AppCommand::SelectImage { view, index }],
        AppIntent::CreateSubsetRequested => vec![AppCommand::CreateSubset],
        AppIntent::RemoveSubsetRequested { index } => vec![
            AppCommand::AbandonRoi,
            AppCommand::RemoveSubset { index },
        ],
        AppIntent::SimultaneousToggled { enabled } => {
            vec![AppCommand::SetSimultaneous { enabled }]
        }

        AppIntent::ColorSelected { index } => vec![
            AppCommand::AbandonRoi,
            AppCommand::SetColorIndex { index },
        ],
        AppIntent::SelectionTypeSelected { index } => vec![
            AppCommand::AbandonRoi,
            AppCommand::SetSelectionIndex { index },
        ],
        AppIntent::AlphaChanged { percent } => vec![AppCommand::SetAlpha {
            alpha: percent.clamp(0.0, 100.0) / 100.0,
        }],
        AppIntent::FlipXToggled { enabled } => {
            map_transforms(state, |t| Transforms { flip_x: enabled, ..t })
        }
        AppIntent::FlipYToggled { enabled } => {
            map_transforms(state, |t| Transforms { flip_y: enabled, ..t })
        }
        AppIntent::SwapXyToggled { enabled } => {
            map_transforms(state, |t| Transforms { swap_xy: enabled, ..t })
        }
        AppIntent::ClearCurrentColorRequested => vec![AppCommand::ClearColor],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],

        AppIntent::SaveRoisRequested { path } => vec![AppCommand::SaveRois { path }],
        AppIntent::LoadRoisRequested { path } => vec![
            AppCommand::AbandonRoi,
            AppCommand::LoadRois { path },
        ],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Primärklick beginnt oder setzt fort (Rechteck: beendet), Sekundärklick beendet.
fn map_pointer_press(
    state: &AppState,
    view: ViewId,
    pos: glam::DVec2,
    button: PointerButton,
) -> Vec<AppCommand> {
    let gesture = state.gesture.as_ref();
    match (button, gesture) {
        (PointerButton::Primary, None) => vec![AppCommand::StartRoi { view, pos }],
        (PointerButton::Primary, Some(g)) if g.view != view => vec![
            AppCommand::AbandonRoi,
            AppCommand::StartRoi { view, pos },
        ],
        (PointerButton::Primary, Some(g)) => match g.tool {
            RoiTool::Rectangle(_) => vec![AppCommand::StopRoi],
            _ => vec![AppCommand::ContinueRoi { pos }],
        },
        (PointerButton::Secondary, Some(g)) if g.view == view => vec![AppCommand::StopRoi],
        (PointerButton::Secondary, _) => vec![],
    }
}

fn map_transforms(state: &AppState, change: impl FnOnce(Transforms) -> Transforms) -> Vec<AppCommand> {
    match state.active_set() {
        Some(set) => vec![AppCommand::SetTransforms {
            transforms: change(set.transforms()),
        }],
        None => vec![],
    }
}
