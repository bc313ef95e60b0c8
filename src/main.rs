// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

use lithos::ingest::{write_csv_layers, write_json_column};
use lithos::{
    evaluate_profile_with, lithostatic_pressure, load_column, locate, sample_at_with, ColumnInput,
    CsvSink, InputFormat, JsonSink, LayerIndex, Location, ProfileConfig, ProfileSink,
    Stratigraphy,
};

mod cli;
use cli::display::{self, TableSink};
use cli::{Cli, Commands, ExampleFormat, LogLevel, OutputFormat};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Profile {
            file,
            water_table,
            offset,
            gamma_w,
            format,
            input_format,
            neutral_zero,
        } => run_profile(
            &file,
            water_table,
            offset,
            gamma_w,
            format,
            input_format,
            neutral_zero,
        ),
        Commands::At {
            file,
            elevation,
            water_table,
            input_format,
        } => run_at(&file, elevation, water_table, input_format),
        Commands::Check { file, input_format } => run_check(&file, input_format),
        Commands::Example { format } => run_example(format),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber.
fn init_logging(log_level: LogLevel) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(log_level))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")?;
    Ok(())
}

fn load(file: &str, input_format: Option<InputFormat>) -> Result<ColumnInput> {
    load_column(Path::new(file), input_format).with_context(|| format!("cannot load {}", file))
}

fn run_profile(
    file: &str,
    water_table: Option<f64>,
    offset: Option<f64>,
    gamma_w: Option<f64>,
    format: OutputFormat,
    input_format: Option<InputFormat>,
    neutral_zero: bool,
) -> Result<()> {
    let input = load(file, input_format)?;
    let water_table = input
        .water_table_or(water_table)
        .context("pass --water-table or set water_table in the file")?;

    let mut config: ProfileConfig = input.config;
    if let Some(offset) = offset {
        config = config.with_boundary_offset(offset);
    }
    if let Some(gamma_w) = gamma_w {
        config = config.with_unit_weight_water(gamma_w);
    }
    config.validate()?;

    if !input.stratigraphy.spans(water_table.elevation()) {
        eprintln!(
            "⚠️  water table at {:.2} m NGF lies outside the column ({:.2} → {:.2})",
            water_table.elevation(),
            input.stratigraphy.top(),
            input.stratigraphy.bottom()
        );
    }

    let profile = evaluate_profile_with(&input.stratigraphy, water_table, config);
    debug!(
        max_lithostatic = profile.max_lithostatic(),
        ?format,
        "rendering profile"
    );

    let stdout = io::stdout();
    let mut sink: Box<dyn ProfileSink> = match format {
        OutputFormat::Table => Box::new(TableSink::new(neutral_zero)),
        OutputFormat::Csv => Box::new(CsvSink::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonSink::new(stdout.lock())),
    };
    profile.render_into(sink.as_mut())?;
    Ok(())
}

fn run_at(
    file: &str,
    elevation: f64,
    water_table: Option<f64>,
    input_format: Option<InputFormat>,
) -> Result<()> {
    anyhow::ensure!(
        elevation.is_finite(),
        "elevation must be a finite number, got {}",
        elevation
    );
    let input = load(file, input_format)?;
    let water_table = input
        .water_table_or(water_table)
        .context("pass --water-table or set water_table in the file")?;
    let column = &input.stratigraphy;
    let sample = sample_at_with(elevation, column, water_table, &input.config);
    let location = locate(elevation, column);

    display::section_top(&format!("PRESSURES AT {:.2} m NGF", elevation));
    let place = match location {
        Location::AboveColumn => "above the ground surface".to_string(),
        Location::BelowColumn => "below the base of the column".to_string(),
        Location::Within(index) => format!("in {}", layer_name(column, index)),
        Location::Contact { upper, lower } => format!(
            "on the contact {} / {}",
            layer_name(column, upper),
            layer_name(column, lower)
        ),
    };
    display::row(&format!(" Location       {}", place));
    display::row(&format!(" Water table    {:.2} m NGF", water_table.elevation()));

    display::section_mid("kPa");
    let na = || display::themed(display::GRAY, &[display::DIM], "—");
    let value = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(na);
    display::row(&format!(
        " {}  {}",
        display::pad_right(&display::themed(display::BLUE, &[], "σv  lithostatic"), 18),
        value(sample.lithostatic)
    ));
    display::row(&format!(
        " {}  {:.2}",
        display::pad_right(&display::themed(display::CYAN, &[], "u   pore"), 18),
        sample.pore
    ));
    display::row(&format!(
        " {}  {}",
        display::pad_right(&display::themed(display::GREEN, &[], "σ'v effective"), 18),
        value(sample.effective)
    ));
    display::row(&format!(
        " {}  {}",
        display::pad_right(&display::themed(display::RED, &[], "σh  horizontal"), 18),
        value(sample.horizontal)
    ));

    if let (Location::Contact { lower, .. }, Some(effective)) = (location, sample.effective) {
        let k_lower = column.layer(lower).lateral_coefficient;
        display::row(&format!(
            " {}  {:.2}  (k = {} just below the contact)",
            display::pad_right(&display::themed(display::RED, &[], "σh  below"), 18),
            k_lower * effective + sample.pore,
            k_lower
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_check(file: &str, input_format: Option<InputFormat>) -> Result<()> {
    let input = load(file, input_format)?;
    let column = &input.stratigraphy;

    display::section_top("COLUMN");
    display::row(&format!(
        " {} layers, {:.2} → {:.2} m NGF ({:.2} m)",
        column.layer_count(),
        column.top(),
        column.bottom(),
        column.top() - column.bottom()
    ));
    match input.water_table {
        Some(wt) => display::row(&format!(" Water table {:.2} m NGF", wt.elevation())),
        None => display::row(&display::themed(
            display::YELLOW,
            &[],
            " No water table in file (pass --water-table to profile)",
        )),
    }
    display::row(&format!(
        " γw {} kN/m³, contact offset {} m",
        input.config.unit_weight_water, input.config.boundary_offset
    ));

    display::section_mid("LAYERS");
    display::row(&format!(
        " {} {} {} {} {} {} {}",
        display::pad_right("Layer", 16),
        display::pad_left("Top", 8),
        display::pad_left("Bottom", 8),
        display::pad_left("Thick.", 7),
        display::pad_left("γ", 7),
        display::pad_left("k", 6),
        display::pad_left("σv base", 9),
    ));
    for (i, layer) in column.layers().iter().enumerate() {
        // Upper ownership puts the bottom contact in this layer.
        let base = lithostatic_pressure(layer.bottom_elevation, column).unwrap_or_default();
        display::row(&format!(
            " {} {} {} {} {} {} {}",
            display::pad_right(&display::layer_badge(LayerIndex(i), &layer.label), 16),
            display::pad_left(&format!("{:.2}", layer.top_elevation), 8),
            display::pad_left(&format!("{:.2}", layer.bottom_elevation), 8),
            display::pad_left(&format!("{:.2}", layer.thickness()), 7),
            display::pad_left(&format!("{:.2}", layer.unit_weight), 7),
            display::pad_left(&format!("{:.2}", layer.lateral_coefficient), 6),
            display::pad_left(
                &display::themed(display::BLUE, &[], &format!("{:.2}", base)),
                9
            ),
        ));
    }
    display::section_bot();
    eprintln!("✓ {} is a valid column", file);
    Ok(())
}

fn run_example(format: ExampleFormat) -> Result<()> {
    let reference = ColumnInput::reference();
    match format {
        ExampleFormat::Json => println!("{}", write_json_column(&reference)?),
        ExampleFormat::Csv => write_csv_layers(&reference.stratigraphy, io::stdout().lock())?,
    }
    Ok(())
}

fn layer_name(column: &Stratigraphy, index: LayerIndex) -> String {
    display::layer_badge(index, &column.layer(index).label)
}
