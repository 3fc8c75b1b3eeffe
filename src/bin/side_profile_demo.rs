use log::info;
use serde::Serialize;
use sides_diagnostics::config::side_profile;
use sides_diagnostics::diagnostics::{compose_sheet, profile_side, render_side_profile, SideProfile};
use sides_diagnostics::image::io::{load_image, save_image, write_json_file, LoadMode};
use sides_diagnostics::image::ImageView;
use sides_diagnostics::naming::numbered_file_name;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = side_profile::load_config(Path::new(&config_path))?;

    let image = load_image(&config.input, LoadMode::Rgb)?;
    info!(
        "profiling {} side(s) of {} ({}x{})",
        config.sides.len(),
        config.input.display(),
        image.width(),
        image.height()
    );

    let mut profiles = Vec::with_capacity(config.sides.len());
    let mut panels = Vec::with_capacity(config.sides.len());
    for (index, side) in config.sides.iter().enumerate() {
        let (profile, colors) =
            profile_side(&image, &side.name, side.start, side.end, &config.whiteness)
                .map_err(|e| format!("Side '{}': {e}", side.name))?;
        let panel = render_side_profile(&colors, &config.render)
            .map_err(|e| format!("Side '{}': {e}", side.name))?;

        let name = numbered_file_name("side", index, config.output.index_width, "png");
        let path = config.output.dir.join(&name);
        save_image(&panel, &path)?;
        println!(
            "{:<12} samples={:<5} p{:.0}={:>7} white={} -> {}",
            profile.name,
            profile.sample_count,
            config.whiteness.percentile,
            profile
                .percentile_intensity
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            profile.mostly_white,
            path.display()
        );

        profiles.push(profile);
        panels.push(panel);
    }

    if !panels.is_empty() {
        let sheet = compose_sheet(&panels, 4).map_err(|e| format!("Sheet: {e}"))?;
        let sheet_path = config.output.dir.join("sheet.png");
        save_image(&sheet, &sheet_path)?;
        println!("Saved overview sheet to {}", sheet_path.display());
    }

    if let Some(path) = &config.output.report_json {
        let report = SideProfileReport {
            input: config.input.display().to_string(),
            width: image.width(),
            height: image.height(),
            sides: profiles,
        };
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: side_profile_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SideProfileReport {
    input: String,
    width: usize,
    height: usize,
    sides: Vec<SideProfile>,
}
