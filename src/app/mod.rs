//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Ansichten, laufende Geste, Optionen).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::{RoiColor, SelectionType, ViewId};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PanDirection, PointerButton};
pub use state::{AppState, RoiGesture, UiState};
