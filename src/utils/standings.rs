use crate::utils::text::capitalize;
use crate::vehicle::{Km, Vehicle};
use std::cmp::Ordering;

/// A vehicle's final classification entry.
/// `position` ranks total distance at the moment the race terminated; it can
/// differ from the finisher numbers announced during the race, since those
/// follow finish time.
pub struct RaceResult<'a> {
    pub position: usize,
    pub vehicle: &'a Vehicle,
    pub history: &'a [String],
    pub kilometers: Km,
}

/// How many times a vehicle had to stop for fuel during the race.
pub struct RefuelRecord<'a> {
    pub vehicle: &'a Vehicle,
    pub stops: u32,
}

/// Sorts by kilometers traveled, descending. The sort is stable, so vehicles
/// tied on distance keep their original roster order.
pub fn compute_results<'a>(
    vehicles: &'a [Vehicle],
    histories: &'a [Vec<String>],
) -> Vec<RaceResult<'a>> {
    let mut order: Vec<usize> = (0..vehicles.len()).collect();
    order.sort_by(|&a, &b| {
        vehicles[b]
            .kilometers()
            .partial_cmp(&vehicles[a].kilometers())
            .unwrap_or(Ordering::Equal)
    });
    order
        .into_iter()
        .enumerate()
        .map(|(rank, idx)| RaceResult {
            position: rank + 1,
            vehicle: &vehicles[idx],
            history: histories[idx].as_slice(),
            kilometers: vehicles[idx].kilometers(),
        })
        .collect()
}

/// Prints the classification board.
pub fn print_standings(results: &[RaceResult<'_>]) {
    println!(
        "--------------------------------------------------------------------------------"
    );
    println!(
        "{0: <4} | {1: <25} | {2: <12} | {3: <12} | {4: <10}",
        "Pos", "Vehicle", "Kind", "Kilometers", "Fuel (L)"
    );
    println!(
        "--------------------------------------------------------------------------------"
    );
    for result in results {
        println!(
            "{0: <4} | {1: <25} | {2: <12} | {3: <12.2} | {4: <10.2}",
            result.position,
            capitalize(result.vehicle.name()),
            result.vehicle.kind_label(),
            result.kilometers,
            result.vehicle.fuel_level()
        );
    }
    println!();
}
