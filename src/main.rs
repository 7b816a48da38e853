//! Spect ROI Editor.
//!
//! Headless-Frontend: öffnet einen Bildstapel, lädt oder zeichnet ROIs über
//! dieselben Intents wie ein Zeiger und exportiert die Masken als NPZ.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use glam::DVec2;
use serde::Serialize;
use spect_roi_editor::{
    AppController, AppIntent, AppState, EditorOptions, PointerButton, RoiColor, SelectionType,
    ViewId,
};

/// ROI-Editor für gestapelte Spektralbilder.
#[derive(Parser, Debug)]
#[command(
    name = "spect-roi-editor",
    version,
    about = "ROI-Editor für gestapelte Spektralbilder (ohne GUI)"
)]
struct CliArgs {
    /// Bilddateien des Stapels (PNG, JPEG, TIFF)
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// ROI-Datei, die nach dem Öffnen geladen wird
    #[arg(long, value_name = "FILE.npz")]
    roi: Option<PathBuf>,

    /// Rechteck in Pan-Koordinaten `x0,y0,x1,y1` (mehrfach möglich)
    #[arg(long, value_name = "X0,Y0,X1,Y1", value_parser = parse_rect)]
    rect: Vec<[f64; 4]>,

    /// Farbe für `--rect`
    #[arg(long, default_value = "red")]
    color: String,

    /// Zielpfad für den Export aller Masken
    #[arg(long, value_name = "FILE.npz")]
    export: Option<PathBuf>,

    /// Konfigurationsdatei statt der Datei neben dem Programm
    #[arg(long, value_name = "FILE.toml")]
    config: Option<PathBuf>,
}

fn parse_rect(value: &str) -> Result<[f64; 4], String> {
    let parts: Vec<f64> = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("ungültige Koordinate in '{}': {}", value, e))?;
    parts
        .try_into()
        .map_err(|_| format!("erwartet vier Werte x0,y0,x1,y1, erhalten: '{}'", value))
}

/// Pixelanzahl einer Farbe in einer Ansicht.
#[derive(Serialize)]
struct ColorCount {
    color: &'static str,
    pixels: usize,
}

/// Zusammenfassung einer Ansicht für die JSON-Ausgabe.
#[derive(Serialize)]
struct ViewSummary {
    view: String,
    image: String,
    zoom: f64,
    rois: Vec<ColorCount>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spect ROI Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config_path = args.config.clone().unwrap_or_else(EditorOptions::config_path);
    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&config_path);
    let mut controller = AppController::new();

    controller.handle_intent(
        &mut state,
        AppIntent::OpenImagesRequested {
            paths: args.images.clone(),
        },
    )?;

    if let Some(path) = args.roi {
        controller.handle_intent(&mut state, AppIntent::LoadRoisRequested { path })?;
    }

    if !args.rect.is_empty() {
        let Some(color) = RoiColor::from_name(&args.color) else {
            bail!("Unbekannte Farbe: {}", args.color);
        };
        draw_rectangles(&mut controller, &mut state, color, &args.rect)?;
    }

    if let Some(path) = args.export {
        controller.handle_intent(&mut state, AppIntent::SaveRoisRequested { path })?;
    }

    let summary = summarize(&state);
    let json =
        serde_json::to_string_pretty(&summary).context("Zusammenfassung nicht serialisierbar")?;
    println!("{}", json);

    Ok(())
}

/// Zeichnet Rechtecke in der Eltern-Ansicht wie eine Zeigerfolge Drücken, Ziehen, Rechtsklick.
fn draw_rectangles(
    controller: &mut AppController,
    state: &mut AppState,
    color: RoiColor,
    rects: &[[f64; 4]],
) -> anyhow::Result<()> {
    controller.handle_intent(
        state,
        AppIntent::ColorSelected {
            index: color.index() as isize,
        },
    )?;
    controller.handle_intent(
        state,
        AppIntent::SelectionTypeSelected {
            index: SelectionType::FilledRectangle.index() as isize,
        },
    )?;

    let view = ViewId::Parent;
    for [x0, y0, x1, y1] in rects.iter().copied() {
        controller.handle_intent(
            state,
            AppIntent::PointerPressed {
                view,
                pos: DVec2::new(x0, y0),
                button: PointerButton::Primary,
            },
        )?;
        controller.handle_intent(
            state,
            AppIntent::PointerMoved {
                view,
                pos: DVec2::new(x1, y1),
            },
        )?;
        controller.handle_intent(
            state,
            AppIntent::PointerPressed {
                view,
                pos: DVec2::new(x1, y1),
                button: PointerButton::Secondary,
            },
        )?;
    }

    Ok(())
}

fn summarize(state: &AppState) -> Vec<ViewSummary> {
    let Some(views) = state.views.as_ref() else {
        return Vec::new();
    };
    views
        .view_ids()
        .filter_map(|id| views.view(id).map(|set| (id, set)))
        .map(|(id, set)| ViewSummary {
            view: id.to_string(),
            image: set.current_image().name().to_string(),
            zoom: set.zoom(),
            rois: RoiColor::selectable()
                .map(|color| ColorCount {
                    color: color.name(),
                    pixels: set.coordinates_of_color(color).len(),
                })
                .filter(|count| count.pixels > 0)
                .collect(),
        })
        .collect()
}
