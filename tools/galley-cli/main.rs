use clap::{Parser, Subcommand};
use galley::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Recipe costing and HACCP compliance reports over a kitchen snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print cost breakdowns for one or all recipes
    Cost {
        /// Path to the kitchen snapshot JSON file
        snapshot_path: String,

        /// Only cost the recipe with this identifier
        #[arg(short, long)]
        recipe: Option<String>,

        /// Optional path to a configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print the compliance report and per-item temperature trends
    Haccp {
        /// Path to the kitchen snapshot JSON file
        snapshot_path: String,

        /// Trailing window, in hours, for missing-check detection
        #[arg(short, long)]
        window_hours: Option<i64>,

        /// Optional path to a configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Cost {
            snapshot_path,
            recipe,
            config,
        } => run_cost(&snapshot_path, recipe.as_deref(), config.as_deref()),
        Command::Haccp {
            snapshot_path,
            window_hours,
            config,
        } => run_haccp(&snapshot_path, window_hours, config.as_deref()),
    }
}

fn load(snapshot_path: &str, config_path: Option<&str>) -> (KitchenSnapshot, GalleyConfig) {
    let snapshot = KitchenSnapshot::from_file(snapshot_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load snapshot from '{}': {}",
            snapshot_path, e
        ))
    });
    let config = match config_path {
        Some(path) => GalleyConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load config from '{}': {}", path, e))
        }),
        None => GalleyConfig::default(),
    };
    (snapshot, config)
}

fn run_cost(snapshot_path: &str, recipe_id: Option<&str>, config_path: Option<&str>) {
    let (snapshot, config) = load(snapshot_path, config_path);

    let targets: Vec<&Recipe> = match recipe_id {
        Some(id) => vec![snapshot.find_recipe(id).unwrap_or_else(|| {
            exit_with_error(&format!("Recipe '{}' not found in snapshot", id))
        })],
        None => snapshot.recipes.iter().collect(),
    };

    let start = Instant::now();
    let engine = CostEngine::with_config(&snapshot.recipes, &snapshot.ingredient_costs, &config);
    for recipe in targets {
        println!("\n{} ({} servings)", recipe.display_name(), recipe.servings);
        let breakdown = engine.breakdown(recipe);
        print!("{}", ReportFormatter::format_breakdown(&breakdown));
        match engine.summarize(recipe) {
            Ok(summary) => println!("  -> {}", ReportFormatter::format_summary(&summary)),
            Err(e) => println!("  -> {}", e),
        }
        let unpriced = breakdown.unpriced().count();
        if unpriced > 0 {
            println!("  -> {} ingredient line(s) could not be priced", unpriced);
        }
    }

    println!("\n--- Summary ---");
    println!("Recipes:          {}", snapshot.recipes.len());
    println!("Catalog entries:  {}", snapshot.ingredient_costs.len());
    println!("Costing time:     {:?}", start.elapsed());
}

fn run_haccp(snapshot_path: &str, window_hours: Option<i64>, config_path: Option<&str>) {
    let (snapshot, mut config) = load(snapshot_path, config_path);
    if let Some(hours) = window_hours {
        config = config.with_window_hours(hours);
    }

    let start = Instant::now();
    let engine = ComplianceEngine::new().with_config(config);
    let report = engine.report(
        &snapshot.haccp_logs,
        &snapshot.haccp_items,
        &snapshot.haccp_reminders,
    );
    println!();
    print!("{}", ReportFormatter::format_compliance(&report));

    println!("\nTemperature trends:");
    for item in &snapshot.haccp_items {
        let trend = analyze_temperature_trends(&snapshot.haccp_logs, &item.id);
        if trend.readings > 0 {
            println!("  {}", ReportFormatter::format_trend(&item.name, &trend));
        }
    }

    println!("\n--- Summary ---");
    println!("Items:            {}", snapshot.haccp_items.len());
    println!("Logs:             {}", snapshot.haccp_logs.len());
    println!("Reminders:        {}", snapshot.haccp_reminders.len());
    println!("Analysis time:    {:?}", start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
