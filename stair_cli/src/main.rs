//! # StairCut CLI Application
//!
//! Terminal interface for the stair stringer calculator. Prompts for the
//! stair dimensions, prints a cut list with fractional-inch dimensions, and
//! can write an SVG blueprint (`--svg <path>`) and a PDF cut-list report
//! (`--pdf <path>`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use stair_core::blueprint::{build_blueprint_path, render_svg};
use stair_core::calculations::multi_stringer::{compute_job, StringerJobInput, TopTreadMode};
use stair_core::calculations::stair::{compute, StairInput};
use stair_core::format::{format_dimension, format_dimension_with_decimal};
use stair_core::report::render_cut_list_pdf;
use stair_core::units::{Feet, Inches};

struct Options {
    svg_path: Option<String>,
    pdf_path: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        svg_path: None,
        pdf_path: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--svg" => options.svg_path = args.next(),
            "--pdf" => options.pdf_path = args.next(),
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }

    options
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    let options = parse_args();

    println!("StairCut - Stair Stringer Calculator");
    println!("====================================");
    println!();
    println!("Mode:");
    println!("  1) Standard layout from target step proportions");
    println!("  2) Multi-stringer job (max riser, landing, kerf, spacing)");
    let mode = prompt_u32("Select mode [1]: ", 1);
    println!();

    match mode {
        2 => run_job_mode(),
        _ => run_standard_mode(&options),
    }
}

fn run_standard_mode(options: &Options) -> ExitCode {
    let input = StairInput {
        label: "CLI".to_string(),
        total_rise_in: prompt_f64("Total rise (in) [108.0]: ", 108.0),
        total_run_in: prompt_f64("Total run (in, 0 = flexible) [0.0]: ", 0.0),
        target_step_rise_in: prompt_f64("Target step rise (in) [7.5]: ", 7.5),
        target_step_run_in: prompt_f64("Target step run (in) [10.0]: ", 10.0),
        stringer_width_in: prompt_f64("Stringer board width (in) [11.25]: ", 11.25),
        ..StairInput::default()
    };

    let issues = input.validate();
    if !issues.is_empty() {
        eprintln!();
        eprintln!("Input problems:");
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        return ExitCode::FAILURE;
    }

    let result = compute(&input);
    let rise_ft: Feet = Inches(result.total_rise_in).into();

    println!();
    println!("═══════════════════════════════════════");
    println!("  STRINGER CUT LIST");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Total rise: {} ({:.2} ft)",
        format_dimension(result.total_rise_in),
        rise_ft.value()
    );
    println!(
        "  Total run:  {} ({})",
        format_dimension(result.total_run_in),
        if input.has_fixed_run() { "fixed" } else { "flexible" }
    );
    println!();
    println!("Cut details:");
    println!("  Steps (risers): {}", result.number_of_steps);
    println!("  Treads:         {}", result.number_of_treads);
    println!(
        "  Rise per step:  {}",
        format_dimension_with_decimal(result.rise_per_step_in)
    );
    println!(
        "  Run per step:   {}",
        format_dimension_with_decimal(result.run_per_step_in)
    );
    println!(
        "  Stringer length (approx): {}",
        format_dimension_with_decimal(result.stringer_length_in)
    );
    println!("  Cut angle:      {:.2}°", result.angle_degrees);
    println!();
    println!("Speed square:");
    println!("  Rise setting (tongue): {:.3}\"", result.rise_per_step_in);
    println!("  Run setting (body):    {:.3}\"", result.run_per_step_in);
    println!();
    println!("Layout marks (from toe):");
    for (i, mark) in result.layout_marks_in.iter().enumerate() {
        println!("  {:>3}: {}", i + 1, format_dimension(*mark));
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    if let Some(path) = &options.svg_path {
        let blueprint = build_blueprint_path(
            result.rise_per_step_in,
            result.run_per_step_in,
            result.number_of_steps,
            input.stringer_width_in,
        );
        match std::fs::write(path, render_svg(&blueprint)) {
            Ok(()) => println!("Blueprint written to {}", path),
            Err(e) => {
                eprintln!("Failed to write SVG to {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(path) = &options.pdf_path {
        match render_cut_list_pdf(&input, &result) {
            Ok(bytes) => match std::fs::write(path, bytes) {
                Ok(()) => println!("Report written to {}", path),
                Err(e) => {
                    eprintln!("Failed to write PDF to {}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_job_mode() -> ExitCode {
    let top_tread = prompt_u32("Count a tread at the top step? (0 = no, 1 = yes) [0]: ", 0);
    let input = StringerJobInput {
        total_rise_in: prompt_f64("Total rise (in) [108.0]: ", 108.0),
        tread_depth_in: prompt_f64("Tread depth (in) [10.0]: ", 10.0),
        max_riser_in: prompt_f64("Maximum riser (in) [7.75]: ", 7.75),
        stringer_count: prompt_u32("Number of stringers [3]: ", 3),
        top_landing_thickness_in: prompt_f64("Top landing thickness (in) [1.0]: ", 1.0),
        nosing_in: prompt_f64("Nosing (in) [1.0]: ", 1.0),
        kerf_in: prompt_f64("Saw kerf (in) [0.125]: ", 0.125),
        top_tread_mode: if top_tread == 1 {
            TopTreadMode::IncludeTopTread
        } else {
            TopTreadMode::ExcludeLanding
        },
        ..StringerJobInput::default()
    };

    let issues = input.validate();
    if !issues.is_empty() {
        eprintln!();
        eprintln!("Input problems:");
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        return ExitCode::FAILURE;
    }

    let result = compute_job(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  MULTI-STRINGER JOB");
    println!("═══════════════════════════════════════");
    println!();
    println!("Layout:");
    println!(
        "  Effective rise: {}",
        format_dimension_with_decimal(result.effective_rise_in)
    );
    println!("  Risers:         {}", result.risers);
    println!("  Treads:         {}", result.treads);
    println!(
        "  Finished riser: {}",
        format_dimension_with_decimal(result.finished_riser_in)
    );
    println!(
        "  Run (cut):      {}",
        format_dimension(result.total_run_cut_in)
    );
    println!(
        "  Run (finished): {}",
        format_dimension(result.total_run_finished_in)
    );
    println!();
    println!("Cuts:");
    println!("  Plumb cut: {}", format_dimension(result.plumb_cut_in));
    println!("  Seat cut:  {}", format_dimension(result.seat_cut_in));
    println!(
        "  Blank length required: {}",
        format_dimension_with_decimal(result.blank_length_required_in)
    );
    println!();
    println!(
        "Stringer spacing ({} across 36\"):",
        result.stringer_count
    );
    for (i, offset) in result.spacing_in.iter().enumerate() {
        println!("  {:>3}: {}", i + 1, format_dimension(*offset));
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    ExitCode::SUCCESS
}
