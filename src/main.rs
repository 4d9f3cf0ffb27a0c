use filigranadrome::garage::build_participants;
use filigranadrome::race::Race;
use filigranadrome::utils::standings::print_standings;
use filigranadrome::utils::text::capitalize;
use itertools::Itertools;
use std::io::{BufRead, Write, stdin, stdout};
use std::process::exit;

const RACE_NAME: &str = "Gran Carrera de Filigranas";
const RACE_DISTANCE: f32 = 1000.0;

fn main() {
    let mut rng = rand::rng();

    let names = match read_roster() {
        Ok(names) => names,
        Err(message) => {
            eprintln!("{message}");
            exit(1);
        }
    };
    let vehicles = match build_participants(&names, &mut rng) {
        Ok(vehicles) => vehicles,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    };
    for vehicle in &vehicles {
        println!("You drew a {vehicle}");
    }

    let mut race = Race::new(RACE_NAME, RACE_DISTANCE, vehicles);
    println!("\n*** {} ***\n", race.name());
    race.run(&mut rng);

    for line in race.event_log() {
        println!("{line}");
    }

    let results = race.results();
    println!("\n* Standings:\n");
    for result in &results {
        println!(
            "{} -> {} ({:.2} km)",
            result.position,
            capitalize(result.vehicle.name()),
            result.kilometers
        );
    }
    println!();
    print_standings(&results);

    println!("{}", results.iter().map(|r| r.vehicle.to_string()).join("\n"));

    println!("\n* Refuel stops:\n");
    for record in race.refuel_records() {
        println!("{} -> {} stops", capitalize(record.vehicle.name()), record.stops);
    }

    println!("\n* Detailed history:\n");
    for result in &results {
        println!(
            "{} -> {}\n{}\n",
            result.position,
            capitalize(result.vehicle.name()),
            result.history.iter().join("\n")
        );
    }
}

/// Reads the participant count and one name per line from stdin.
/// Any setup problem aborts before the race ever starts.
fn read_roster() -> Result<Vec<String>, String> {
    let stdin = stdin();
    let mut lines = stdin.lock().lines();

    prompt("Number of participants: ");
    let count_line = next_line(&mut lines, "No participant count given.")?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| String::from("The participant count must be a number."))?;

    let mut names = Vec::with_capacity(count);
    for i in 1..=count {
        prompt(&format!("* Vehicle name {i} -> "));
        let name = next_line(&mut lines, &format!("Missing a name for vehicle {i}."))?;
        names.push(name.trim().to_string());
    }
    Ok(names)
}

fn next_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    missing: &str,
) -> Result<String, String> {
    lines
        .next()
        .ok_or_else(|| String::from(missing))?
        .map_err(|error| error.to_string())
}

fn prompt(text: &str) {
    print!("{text}");
    stdout().flush().expect("Could not flush stdout");
}
