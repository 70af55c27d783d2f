use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use std::process::ExitCode;

use wordwideweb::config::{self, Config, DEFAULT_CONFIG_FILE};
use wordwideweb::content::{dump_fragment, load_pack_directory, ContentStore};
use wordwideweb::gui::{WordWideWebApp, WINDOW_TITLE};
use wordwideweb::router::Route;

#[derive(Parser, Debug)]
#[command(name = "wordwideweb", version, about = "Etymology-driven vocabulary, grammar and reading drills")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Fragment to open at startup, e.g. `vocab-nl-1`
    #[arg(long)]
    page: Option<String>,

    /// Print the lesson content for a fragment as JSON and exit
    #[arg(long, value_name = "FRAGMENT")]
    dump: Option<String>,
}

fn build_store(config: &Config) -> ContentStore {
    let mut store = ContentStore::builtin();
    if let Some(dir) = &config.content_dir {
        match load_pack_directory(&mut store, dir) {
            Ok(report) => log::info!(
                "Loaded {} lesson pack(s) from {:?}, skipped {}",
                report.loaded.len(),
                dir,
                report.skipped.len()
            ),
            Err(e) => log::warn!("Could not read content packs: {}", e),
        }
    }
    store
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let (config, config_error) = match config::load_config_from_file(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => {
            log::warn!("Error loading {:?}: {}. Falling back to defaults.", cli.config, e);
            (Config::default(), Some(e.to_string()))
        }
    };

    let store = build_store(&config);

    if let Some(fragment) = &cli.dump {
        return match dump_fragment(&store, fragment) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let start = Route::parse(cli.page.as_deref().unwrap_or(&config.start_page));
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(WordWideWebApp::new(cc, config, config_error, store, start))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("GUI failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
