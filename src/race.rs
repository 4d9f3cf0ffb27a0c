use crate::utils::standings::{RaceResult, RefuelRecord, compute_results};
use crate::utils::text::capitalize;
use crate::vehicle::{Km, Vehicle};
use rand::Rng;
use std::ops::RangeInclusive;

/// Engine knobs. Distances are whole kilometers when drawn, applied as km
/// floats.
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Range a vehicle's raw per-turn distance is drawn from.
    pub turn_distance: RangeInclusive<u32>,
    /// Range a single trick event's penalty is drawn from.
    pub trick_penalty: RangeInclusive<u32>,
    /// Upper bound on trick events per turn; 0 disables them.
    pub max_tricks_per_turn: u32,
    /// Hard turn ceiling. Heavy trick penalties can keep net distances near
    /// zero indefinitely, so a race must always have an escape hatch.
    pub max_turns: u32,
    /// A full-grid status snapshot goes to the event log every this many
    /// turns; 0 disables the snapshots.
    pub partial_standings_every: u32,
    /// Left-hand-traffic conditions. No formula reads this yet; it is kept
    /// as explicit engine configuration rather than process-wide state.
    pub british_conditions: bool,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            turn_distance: 10..=200,
            trick_penalty: 10..=50,
            max_tricks_per_turn: 3,
            max_turns: 1000,
            partial_standings_every: 3,
            british_conditions: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaceState {
    NotStarted,
    InProgress,
    Finished,
}

/// The race engine. Owns the vehicles for the duration of the race and all
/// per-vehicle bookkeeping: histories, refuel counters and the finish order.
pub struct Race {
    name: String,
    distance: Km,
    config: RaceConfig,
    vehicles: Vec<Vehicle>,
    /// Indices into `vehicles` that have not crossed the finish line yet.
    active: Vec<usize>,
    histories: Vec<Vec<String>>,
    refuels: Vec<u32>,
    /// Indices in the order they crossed the finish line.
    finish_order: Vec<usize>,
    events: Vec<String>,
    turn: u32,
    state: RaceState,
}

impl Race {
    pub fn new(name: &str, distance: Km, vehicles: Vec<Vehicle>) -> Self {
        Self::with_config(name, distance, vehicles, RaceConfig::default())
    }

    pub fn with_config(
        name: &str,
        distance: Km,
        vehicles: Vec<Vehicle>,
        config: RaceConfig,
    ) -> Self {
        let count = vehicles.len();
        Self {
            name: String::from(name),
            distance,
            config,
            active: (0..count).collect(),
            histories: vec![Vec::new(); count],
            refuels: vec![0; count],
            finish_order: Vec::new(),
            events: Vec::new(),
            turn: 0,
            state: RaceState::NotStarted,
            vehicles,
        }
    }

    /// Runs turns until every vehicle has crossed the finish line or the
    /// turn ceiling trips. Each turn draws a raw distance per active
    /// vehicle, lets 0..=max trick events shave random penalties off random
    /// victims (never below zero for the turn), and hands the net distances
    /// to [`Race::step`].
    pub fn run(&mut self, rng: &mut impl Rng) {
        if self.state == RaceState::Finished {
            return;
        }
        if self.state == RaceState::NotStarted && !self.active.is_empty() {
            self.events.push(format!(
                "{} is underway: {} participants over {} km{}",
                self.name,
                self.active.len(),
                self.distance,
                if self.config.british_conditions {
                    " (British driving conditions)"
                } else {
                    ""
                }
            ));
        }

        while !self.active.is_empty() && self.turn < self.config.max_turns {
            let mut distances: Vec<Km> = self
                .active
                .iter()
                .map(|_| rng.random_range(self.config.turn_distance.clone()) as Km)
                .collect();

            let tricks = rng.random_range(0..=self.config.max_tricks_per_turn);
            for _ in 0..tricks {
                let slot = rng.random_range(0..self.active.len());
                let penalty = rng.random_range(self.config.trick_penalty.clone()) as Km;
                distances[slot] = (distances[slot] - penalty).max(0.0);
                let idx = self.active[slot];
                self.histories[idx].push(format!(
                    "Turn {}: trick event, -{:.2} km (net distance now {:.2} km)",
                    self.turn + 1,
                    penalty,
                    distances[slot]
                ));
            }

            self.step(&distances);
        }

        if !self.active.is_empty() {
            self.events.push(format!(
                "Race stopped after {} turns with {} vehicles still on track",
                self.turn,
                self.active.len()
            ));
            self.active.clear();
        }
        self.state = RaceState::Finished;
    }

    /// Advances one simultaneous turn with the given net distances, one per
    /// active vehicle in active-set order. [`Race::run`] drives this; it is
    /// public so a scripted caller can replay exact distances.
    ///
    /// Panics if `distances` does not match the active set's length.
    pub fn step(&mut self, distances: &[Km]) {
        assert_eq!(
            distances.len(),
            self.active.len(),
            "one distance per active vehicle"
        );
        if self.state == RaceState::Finished || self.active.is_empty() {
            return;
        }
        self.state = RaceState::InProgress;
        self.turn += 1;

        let mut finished_slots: Vec<usize> = Vec::new();
        for (slot, (&idx, &net)) in self.active.iter().zip(distances).enumerate() {
            let vehicle = &mut self.vehicles[idx];
            vehicle.consume_fuel(net);
            vehicle.add_kilometers(net);

            // Running dry is the refuel trigger, not an error.
            if vehicle.fuel_level() <= 0.0 {
                vehicle.refuel();
                self.refuels[idx] += 1;
                self.histories[idx].push(format!(
                    "Turn {}: tank empty, refuel stop #{} (back to {:.2} L)",
                    self.turn,
                    self.refuels[idx],
                    vehicle.tank_capacity()
                ));
            }

            self.histories[idx].push(format!(
                "Turn {}: covered {:.2} km -> {}",
                self.turn,
                net,
                vehicle.describe_status()
            ));

            if vehicle.kilometers() >= self.distance {
                finished_slots.push(slot);
            }
        }

        // Remove back to front so the remaining slots stay valid.
        for &slot in finished_slots.iter().rev() {
            let idx = self.active.remove(slot);
            self.finish_order.push(idx);
            let rank = self.finish_order.len();
            self.histories[idx].push(format!(
                "Turn {}: crossed the finish line as finisher #{}",
                self.turn, rank
            ));
            self.events.push(format!(
                "*** {} crosses the finish line as finisher #{}! ***",
                capitalize(self.vehicles[idx].name()),
                rank
            ));
        }

        let snapshot_every = self.config.partial_standings_every;
        if snapshot_every > 0 && self.turn % snapshot_every == 0 && !self.active.is_empty() {
            self.events.push(format!("--- Status after turn {} ---", self.turn));
            for vehicle in &self.vehicles {
                self.events.push(vehicle.describe_status());
            }
        }

        if self.active.is_empty() {
            self.state = RaceState::Finished;
        }
    }

    /// Final classification: total distance descending, roster order on
    /// ties.
    pub fn results(&self) -> Vec<RaceResult<'_>> {
        compute_results(&self.vehicles, &self.histories)
    }

    pub fn refuel_records(&self) -> Vec<RefuelRecord<'_>> {
        self.vehicles
            .iter()
            .zip(&self.refuels)
            .map(|(vehicle, &stops)| RefuelRecord { vehicle, stops })
            .collect()
    }

    /// Vehicles in the order they crossed the finish line.
    pub fn finish_order(&self) -> Vec<&Vehicle> {
        self.finish_order.iter().map(|&idx| &self.vehicles[idx]).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> Km {
        self.distance
    }

    pub fn state(&self) -> RaceState {
        self.state
    }

    pub fn turns_played(&self) -> u32 {
        self.turn
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn event_log(&self) -> &[String] {
        &self.events
    }

    pub fn british_conditions(&self) -> bool {
        self.config.british_conditions
    }
}
