use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use galley::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;

/// A CLI tool to generate a sample kitchen snapshot for the Galley CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_kitchen.json")]
    output: String,

    /// How many days of checks to generate, counting back from now
    #[arg(long, default_value_t = 7)]
    days: i64,

    /// Probability that a generated reading falls outside the item's safe range
    #[arg(long, default_value_t = 0.1)]
    fault_rate: f64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.fault_rate) {
        eprintln!(
            "Error: --fault-rate ({}) must be between 0 and 1",
            cli.fault_rate
        );
        std::process::exit(1);
    }

    println!(
        "Generating kitchen snapshot ({} day(s) of checks, fault rate {})...",
        cli.days, cli.fault_rate
    );

    let now = Utc::now();
    let (recipes, ingredient_costs) = generate_recipes();
    let haccp_items = generate_items();
    let haccp_logs = generate_logs(&mut rng, &haccp_items, now, cli.days, cli.fault_rate);
    let haccp_reminders = generate_reminders(&mut rng, &haccp_items, now);

    let snapshot = KitchenSnapshot {
        recipes,
        ingredient_costs,
        haccp_items,
        haccp_logs,
        haccp_reminders,
    };
    snapshot.save(&cli.output)?;

    println!(
        "Successfully generated and saved kitchen snapshot to '{}'",
        cli.output
    );

    Ok(())
}

/// A small menu with one shared sub-recipe.
fn generate_recipes() -> (Vec<Recipe>, Vec<IngredientCost>) {
    let catalog = vec![
        IngredientCost::new("Tomatoes", 2.40, PurchaseUnit::Kilogram),
        IngredientCost::new("Olive oil", 8.50, PurchaseUnit::Litre),
        IngredientCost::new("Garlic", 0.30, PurchaseUnit::Item),
        IngredientCost::new("Spaghetti", 1.90, PurchaseUnit::Kilogram),
        IngredientCost::new("Chicken breast", 9.80, PurchaseUnit::Kilogram),
        IngredientCost::new("Feta", 11.00, PurchaseUnit::Kilogram),
    ];

    let sauce = Recipe::new("tomato-sauce", 10)
        .with_name("Tomato sauce")
        .with_yield(2.0, Unit::Kilogram)
        .with_ingredient(Ingredient::catalog("tomatoes", 2200.0, Unit::Gram))
        .with_ingredient(Ingredient::catalog("olive oil", 150.0, Unit::Millilitre))
        .with_ingredient(Ingredient::catalog("garlic", 4.0, Unit::Item));
    let pasta = Recipe::new("spaghetti-pomodoro", 4)
        .with_name("Spaghetti pomodoro")
        .with_selling_price(11.50)
        .with_ingredient(Ingredient::catalog("spaghetti", 400.0, Unit::Gram))
        .with_ingredient(Ingredient::sub_recipe(
            "Tomato sauce",
            "tomato-sauce",
            600.0,
            Unit::Gram,
        ))
        .with_ingredient(Ingredient::catalog("basil", 10.0, Unit::Gram));
    let chicken = Recipe::new("chicken-tomato", 2)
        .with_name("Chicken in tomato sauce")
        .with_selling_price(15.00)
        .with_ingredient(Ingredient::catalog("chicken breast", 500.0, Unit::Gram))
        .with_ingredient(Ingredient::sub_recipe(
            "Tomato sauce",
            "tomato-sauce",
            0.4,
            Unit::Kilogram,
        ))
        .with_ingredient(Ingredient::catalog("feta", 80.0, Unit::Gram));

    println!("-> Generated 3 recipes and {} catalog entries.", catalog.len());
    (vec![sauce, pasta, chicken], catalog)
}

fn generate_items() -> Vec<HaccpItem> {
    let items = [
        ("fridge-1", "Walk-in fridge", HaccpCategory::Fridge),
        ("fridge-2", "Ψυγείο πάγκου", HaccpCategory::Fridge),
        ("freezer-1", "Chest freezer", HaccpCategory::Freezer),
        ("hot-1", "Bain marie", HaccpCategory::HotHolding),
        ("cook-1", "Chicken core temperature", HaccpCategory::Cooking),
        ("area-1", "Prep area", HaccpCategory::KitchenArea),
        ("store-1", "Dry store", HaccpCategory::Storage),
        ("delivery-1", "Supplier delivery", HaccpCategory::SupplierDelivery),
    ];
    println!("-> Generated {} HACCP items.", items.len());
    items
        .into_iter()
        .map(|(id, name, category)| HaccpItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
        })
        .collect()
}

fn generate_logs(
    rng: &mut ThreadRng,
    items: &[HaccpItem],
    now: DateTime<Utc>,
    days: i64,
    fault_rate: f64,
) -> Vec<HaccpLog> {
    let authors = ["Maria", "Nikos", "Sam"];
    let mut logs = Vec::new();

    for item in items {
        let every = check_interval(item.category);
        let mut at = now - Duration::days(days);
        while at < now {
            let id = format!("log-{}", logs.len() + 1);
            let author = authors[rng.random_range(0..authors.len())];
            let log = match reading_range(item.category) {
                Some((lo, hi)) => {
                    let faulty = rng.random_bool(fault_rate);
                    let reading = if faulty {
                        faulty_reading(rng, item.category, lo, hi)
                    } else {
                        rng.random_range(lo..hi)
                    };
                    let value = format!("{:.1}", reading);
                    let flagged = is_out_of_range(&value, &item.name);
                    HaccpLog::temperature(id, &item.id, at, value).flagged(flagged)
                }
                None => HaccpLog::new(id, &item.id, non_temperature_type(item.category), at),
            };
            logs.push(log.with_author(author));
            at += every + Duration::minutes(rng.random_range(-20..20));
        }
    }

    println!("-> Generated {} HACCP logs.", logs.len());
    logs
}

fn generate_reminders(
    rng: &mut ThreadRng,
    items: &[HaccpItem],
    now: DateTime<Utc>,
) -> Vec<HaccpReminder> {
    let reminders: Vec<HaccpReminder> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let frequency = match item.category {
                HaccpCategory::Fridge | HaccpCategory::Freezer => CheckFrequency::Every4Hours,
                HaccpCategory::HotHolding => CheckFrequency::Every2Hours,
                HaccpCategory::Cooking => CheckFrequency::Hourly,
                HaccpCategory::SupplierDelivery => CheckFrequency::Weekly,
                HaccpCategory::KitchenArea | HaccpCategory::Storage => CheckFrequency::Daily,
            };
            let due = now + Duration::minutes(rng.random_range(-180..180));
            HaccpReminder::new(format!("reminder-{}", i + 1), &item.id, frequency).due_at(due)
        })
        .collect();
    println!("-> Generated {} reminders.", reminders.len());
    reminders
}

fn check_interval(category: HaccpCategory) -> Duration {
    match category {
        HaccpCategory::Cooking | HaccpCategory::HotHolding => Duration::hours(3),
        HaccpCategory::Fridge | HaccpCategory::Freezer => Duration::hours(6),
        HaccpCategory::KitchenArea | HaccpCategory::Storage => Duration::days(1),
        HaccpCategory::SupplierDelivery => Duration::days(3),
    }
}

// Realistic in-range readings per category; `None` for checks without a reading.
fn reading_range(category: HaccpCategory) -> Option<(f64, f64)> {
    match category {
        HaccpCategory::Fridge => Some((1.0, 5.0)),
        HaccpCategory::Freezer => Some((-24.0, -18.0)),
        HaccpCategory::HotHolding => Some((64.0, 80.0)),
        HaccpCategory::Cooking => Some((75.0, 90.0)),
        _ => None,
    }
}

// Cooking and hot holding are only unsafe below their range; cold storage above it.
fn faulty_reading(rng: &mut ThreadRng, category: HaccpCategory, lo: f64, hi: f64) -> f64 {
    match category {
        HaccpCategory::Cooking | HaccpCategory::HotHolding => lo - rng.random_range(3.0..12.0),
        _ => hi + rng.random_range(1.0..6.0),
    }
}

fn non_temperature_type(category: HaccpCategory) -> LogType {
    match category {
        HaccpCategory::SupplierDelivery => LogType::Receiving,
        _ => LogType::Cleaning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faulty_readings_are_flagged_for_every_item() {
        let mut rng = rand::rng();
        for item in generate_items() {
            let Some((lo, hi)) = reading_range(item.category) else {
                continue;
            };
            for _ in 0..50 {
                let value = format!("{:.1}", faulty_reading(&mut rng, item.category, lo, hi));
                assert!(is_out_of_range(&value, &item.name), "{} read {value}", item.name);
            }
        }
    }
}
