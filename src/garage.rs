//! Roster generation. Every pick takes the caller's rng so a seeded
//! generator reproduces the exact same grid.

use crate::error::{Error, Result};
use crate::utils::rounding::Rounded;
use crate::vehicle::{Automobile, Motorcycle, Quad, QuadKind, Truck, Vehicle, VehicleInfo};
use itertools::Itertools;
use rand::Rng;

pub const BRANDS: [&str; 4] = ["Toyota", "Volkswagen", "Seat", "Citroen"];
pub const MODELS: [&str; 5] = ["XSARA", "BMW", "Variant", "Fiesta", "Focus"];

pub fn pick_brand(rng: &mut impl Rng) -> &'static str {
    BRANDS[rng.random_range(0..BRANDS.len())]
}

pub fn pick_model(rng: &mut impl Rng) -> &'static str {
    MODELS[rng.random_range(0..MODELS.len())]
}

pub fn pick_hybrid(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

pub fn pick_quad_kind(rng: &mut impl Rng) -> QuadKind {
    match rng.random_range(0..3) {
        0 => QuadKind::Lightweight,
        1 => QuadKind::NonLightweight,
        _ => QuadKind::Special,
    }
}

pub fn pick_displacement(rng: &mut impl Rng) -> u32 {
    rng.random_range(Motorcycle::DISPLACEMENT_RANGE)
}

/// Vehicles start the race with 20% to 100% of their tank.
pub fn starting_fuel(capacity: f32, rng: &mut impl Rng) -> f32 {
    let percentage = rng.random_range(20..=100) as f32;
    (capacity * percentage / 100.0).rounded(2)
}

/// Builds a vehicle of uniformly random kind with randomized, validated
/// parameters. Trucks and quads leave the brand/model blank.
pub fn generate_vehicle(name: &str, rng: &mut impl Rng) -> Result<Vehicle> {
    match rng.random_range(0..4) {
        0 => {
            let capacity = rng.random_range(30..=60) as f32;
            let fuel = starting_fuel(capacity, rng);
            let hybrid = pick_hybrid(rng);
            let info = VehicleInfo::new(name, pick_brand(rng), pick_model(rng), capacity, fuel, hybrid);
            Ok(Automobile::new(info).into())
        }
        1 => {
            let capacity = rng.random_range(15..=30) as f32;
            let fuel = starting_fuel(capacity, rng);
            let info = VehicleInfo::new(name, pick_brand(rng), pick_model(rng), capacity, fuel, false);
            Ok(Motorcycle::new(info, pick_displacement(rng))?.into())
        }
        2 => {
            let capacity = rng.random_range(90..=150) as f32;
            let fuel = starting_fuel(capacity, rng);
            let hybrid = pick_hybrid(rng);
            let weight = rng.random_range(1000..=10000) as f32;
            let info = VehicleInfo::new(name, "", "", capacity, fuel, hybrid);
            Ok(Truck::new(info, weight)?.into())
        }
        _ => {
            let capacity = rng.random_range(20..=40) as f32;
            let fuel = starting_fuel(capacity, rng);
            let kind = pick_quad_kind(rng);
            let info = VehicleInfo::new(name, "", "", capacity, fuel, false);
            Ok(Quad::new(info, pick_displacement(rng), kind)?.into())
        }
    }
}

/// Builds the full roster. Names must be unique ignoring case and
/// surrounding whitespace; a duplicate aborts the whole setup.
pub fn build_participants<S: AsRef<str>>(names: &[S], rng: &mut impl Rng) -> Result<Vec<Vehicle>> {
    if let Some(duplicate) = names
        .iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .duplicates()
        .next()
    {
        return Err(Error::DuplicateName(duplicate));
    }
    names
        .iter()
        .map(|name| generate_vehicle(name.as_ref(), rng))
        .collect()
}
