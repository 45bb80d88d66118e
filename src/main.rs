//! Viewer entry point — CLI wiring and config-driven dataset loading.

use std::path::Path;
use std::process;

use windfarm_view::config::ViewerConfig;
use windfarm_view::data::annotate::annotate_years;
use windfarm_view::data::geojson;
use windfarm_view::data::summary::SiteSummary;
use windfarm_view::io::export::export_csv;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    data_path: Option<String>,
    initial_year: Option<i32>,
    export_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("windfarm-view — interactive wind-farm commissioning viewer");
    eprintln!();
    eprintln!("Usage: windfarm-view [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load viewer config from TOML file");
    eprintln!("  --preset <name>          Use a built-in viewport preset (uk)");
    eprintln!("  --data <path>            GeoJSON dataset (overrides config)");
    eprintln!("  --year <i32>             Apply an initial year filter");
    eprintln!("  --export-out <path>      Export annotated sites to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive map viewer");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after loading");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the uk preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        data_path: None,
        initial_year: None,
        export_out: None,
        #[cfg(feature = "tui")]
        tui: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--year" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --year requires an integer argument");
                    process::exit(1);
                }
                if let Ok(y) = args[i].parse::<i32>() {
                    cli.initial_year = Some(y);
                } else {
                    eprintln!("error: --year value \"{}\" is not a valid year", args[i]);
                    process::exit(1);
                }
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then the uk default
    let mut config = if let Some(ref path) = cli.config_path {
        match ViewerConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ViewerConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ViewerConfig::uk()
    };

    // Apply dataset override
    if let Some(path) = cli.data_path {
        config.data.path = path;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Load and annotate — the collection is built once and then read-only
    let report = match geojson::load_file(Path::new(&config.data.path)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let mut sites = report.sites;
    annotate_years(&mut sites, config.time.zone_mode());

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&sites, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Sites written to {path}");
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        windfarm_view::tui::run(config, sites, report.skipped_geometry, cli.initial_year);
        return;
    }

    // Headless report: per-site lines, then the summary
    let filter = windfarm_view::data::filter::YearFilter {
        threshold: cli.initial_year,
    };
    for i in filter.visible_indices(&sites) {
        println!("{}", sites[i]);
    }
    let summary = SiteSummary::from_records(&sites);
    println!("\n{summary}");
    if report.skipped_geometry > 0 {
        eprintln!(
            "{} features skipped (no point geometry)",
            report.skipped_geometry
        );
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(windfarm_view::api::AppState { sites, summary });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(windfarm_view::api::serve(state, addr));
    }
}
