use std::path::PathBuf;

use clap::Parser;

/// Hot Prospects - keep track of the people you meet
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Database file path
    #[arg(short, long, env = "PROSPECTS_DB", default_value = ".data/prospects.db")]
    file: PathBuf,

    /// Import prospects from a JSON file into a new database
    #[arg(long, value_name = "JSON_PATH", conflicts_with = "export")]
    import: Option<PathBuf>,

    /// Export all prospects to a JSON file
    #[arg(long, value_name = "JSON_PATH")]
    export: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    prospects::logging::init_logging(args.verbose);

    if let Some(json_path) = args.export {
        match prospects::migrate::export_json(&args.file, &json_path) {
            Ok(n) => println!("Exported {} prospects to {}", n, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(dir) = args.file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    if let Some(json_path) = args.import {
        println!("Importing from {}...", json_path.display());
        if args.file.exists() {
            eprintln!("Error: Database file {} already exists.", args.file.display());
            eprintln!("Remove it first or use --file to specify a different path.");
            std::process::exit(1);
        }
        match prospects::migrate::import_json(&json_path, &args.file) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Prospects: {}", stats.prospects);
                println!("  Contacted: {}", stats.contacted);
                if stats.skipped > 0 {
                    println!("  Skipped duplicates: {}", stats.skipped);
                }
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    prospects::cli::run(&args.file);
}
