use crate::error::{Error, Result};
use crate::utils::rounding::Rounded;
use crate::utils::text::capitalize;
use std::fmt;
use std::ops::RangeInclusive;

pub type Km = f32;

/// Fields shared by every vehicle variant.
/// Names are stored lowercased; [`Vehicle::describe_status`] and the full
/// dump capitalize them for display.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleInfo {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub tank_capacity: f32,
    pub fuel_level: f32,
    pub kilometers: Km,
    pub hybrid: bool,
}

impl VehicleInfo {
    pub fn new(
        name: &str,
        brand: &str,
        model: &str,
        tank_capacity: f32,
        fuel_level: f32,
        hybrid: bool,
    ) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            brand: String::from(brand),
            model: String::from(model),
            tank_capacity,
            fuel_level,
            kilometers: 0.0,
            hybrid,
        }
    }
}

/// Baseline vehicle. Hybrids get an additive km-per-liter bonus.
#[derive(Clone, Debug, PartialEq)]
pub struct Automobile {
    pub info: VehicleInfo,
}

impl Automobile {
    pub const KM_PER_LITER: f32 = 15.0;
    /// Extra km per liter when the electric assist is fitted.
    pub const ELECTRIC_SAVINGS: f32 = 5.0;

    pub fn new(info: VehicleInfo) -> Self {
        Self { info }
    }

    fn efficiency(&self) -> f32 {
        if self.info.hybrid {
            Self::KM_PER_LITER + Self::ELECTRIC_SAVINGS
        } else {
            Self::KM_PER_LITER
        }
    }
}

/// More efficient than an automobile. The displacement adjustment
/// `1 - displacement/1000` uses integer division, so it only vanishes at
/// exactly 1000 cc.
#[derive(Clone, Debug, PartialEq)]
pub struct Motorcycle {
    pub info: VehicleInfo,
    pub displacement: u32,
}

impl Motorcycle {
    pub const KM_PER_LITER: f32 = 20.0;
    pub const DISPLACEMENT_RANGE: RangeInclusive<u32> = 125..=1000;

    pub fn new(info: VehicleInfo, displacement: u32) -> Result<Self> {
        if !Self::DISPLACEMENT_RANGE.contains(&displacement) {
            return Err(Error::DisplacementOutOfRange(displacement));
        }
        Ok(Self { info, displacement })
    }

    fn efficiency(&self) -> f32 {
        Self::KM_PER_LITER - (1 - self.displacement / 1000) as f32
    }
}

/// An automobile hauling weight. Every full 1000 kg adds 0.2 to the factor
/// that scales the autonomy; consumption is plain `distance / efficiency`
/// with no weight factor.
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    pub info: VehicleInfo,
    pub weight: f32,
}

impl Truck {
    // 100 km / 16 L
    pub const KM_PER_LITER: f32 = 6.25;
    pub const WEIGHT_RANGE: RangeInclusive<f32> = 1000.0..=10000.0;

    pub fn new(info: VehicleInfo, weight: f32) -> Result<Self> {
        if !Self::WEIGHT_RANGE.contains(&weight) {
            return Err(Error::TruckWeightOutOfRange(weight));
        }
        Ok(Self { info, weight })
    }

    pub fn weight_factor(&self) -> f32 {
        0.2 * (self.weight / 1000.0).floor()
    }

    fn efficiency(&self) -> f32 {
        if self.info.hybrid {
            Self::KM_PER_LITER + Automobile::ELECTRIC_SAVINGS
        } else {
            Self::KM_PER_LITER
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadKind {
    Lightweight,
    NonLightweight,
    Special,
}

impl QuadKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuadKind::Lightweight => "light quadricycle",
            QuadKind::NonLightweight => "non-light quadricycle",
            QuadKind::Special => "special vehicle",
        }
    }
}

/// Always exactly half as autonomous as a motorcycle with the same fuel and
/// displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub info: VehicleInfo,
    pub displacement: u32,
    pub kind: QuadKind,
}

impl Quad {
    pub fn new(info: VehicleInfo, displacement: u32, kind: QuadKind) -> Result<Self> {
        if !Motorcycle::DISPLACEMENT_RANGE.contains(&displacement) {
            return Err(Error::DisplacementOutOfRange(displacement));
        }
        Ok(Self {
            info,
            displacement,
            kind,
        })
    }

    fn efficiency(&self) -> f32 {
        (Motorcycle::KM_PER_LITER - (1 - self.displacement / 1000) as f32) / 2.0
    }
}

/// A race participant. The variants share [`VehicleInfo`] by composition and
/// differ only in their efficiency formulas and extra fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Vehicle {
    Automobile(Automobile),
    Motorcycle(Motorcycle),
    Truck(Truck),
    Quad(Quad),
}

impl Vehicle {
    pub fn info(&self) -> &VehicleInfo {
        match self {
            Vehicle::Automobile(a) => &a.info,
            Vehicle::Motorcycle(m) => &m.info,
            Vehicle::Truck(t) => &t.info,
            Vehicle::Quad(q) => &q.info,
        }
    }

    fn info_mut(&mut self) -> &mut VehicleInfo {
        match self {
            Vehicle::Automobile(a) => &mut a.info,
            Vehicle::Motorcycle(m) => &mut m.info,
            Vehicle::Truck(t) => &mut t.info,
            Vehicle::Quad(q) => &mut q.info,
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn kilometers(&self) -> Km {
        self.info().kilometers
    }

    pub fn fuel_level(&self) -> f32 {
        self.info().fuel_level
    }

    pub fn tank_capacity(&self) -> f32 {
        self.info().tank_capacity
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Vehicle::Automobile(_) => "Automobile",
            Vehicle::Motorcycle(_) => "Motorcycle",
            Vehicle::Truck(_) => "Truck",
            Vehicle::Quad(_) => "Quad",
        }
    }

    /// Effective km per liter on the current configuration.
    /// The quad's value is already halved here, so autonomy and consumption
    /// stay consistent with each other.
    fn efficiency(&self) -> f32 {
        match self {
            Vehicle::Automobile(a) => a.efficiency(),
            Vehicle::Motorcycle(m) => m.efficiency(),
            Vehicle::Truck(t) => t.efficiency(),
            Vehicle::Quad(q) => q.efficiency(),
        }
    }

    /// Kilometers reachable on the current fuel, rounded to 2 decimals.
    /// Only the truck scales this by its weight factor.
    pub fn autonomy(&self) -> Km {
        let km = self.info().fuel_level * self.efficiency();
        match self {
            Vehicle::Truck(t) => (km * t.weight_factor()).rounded(2),
            _ => km.rounded(2),
        }
    }

    /// Liters needed to cover `distance`, rounded to 2 decimals.
    pub fn fuel_needed(&self, distance: Km) -> f32 {
        (distance / self.efficiency()).rounded(2)
    }

    /// Burns the fuel for `distance`. The level may transiently drop below
    /// zero; the race engine treats that as the refuel trigger, not as an
    /// error.
    pub fn consume_fuel(&mut self, distance: Km) {
        let spent = self.fuel_needed(distance);
        self.info_mut().fuel_level -= spent;
    }

    /// Resets the tank to full capacity.
    pub fn refuel(&mut self) {
        let info = self.info_mut();
        info.fuel_level = info.tank_capacity;
    }

    pub fn add_kilometers(&mut self, distance: Km) {
        debug_assert!(distance >= 0.0, "kilometers only ever accumulate");
        self.info_mut().kilometers += distance;
    }

    /// One-line status: capitalized name, kind, kilometers and fuel at 2 dp.
    pub fn describe_status(&self) -> String {
        let info = self.info();
        format!(
            "{} {}(km = {:.2}, fuel = {:.2} L)",
            capitalize(&info.name),
            self.kind_label(),
            info.kilometers,
            info.fuel_level
        )
    }
}

/// Full field dump, including the variant-specific fields.
impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        write!(
            f,
            "{}(name={}, brand={}, model={}, tank_capacity={}, fuel_level={}, kilometers={}, hybrid={}",
            self.kind_label(),
            capitalize(&info.name),
            info.brand,
            info.model,
            info.tank_capacity,
            info.fuel_level,
            info.kilometers,
            info.hybrid
        )?;
        match self {
            Vehicle::Automobile(_) => write!(f, ")"),
            Vehicle::Motorcycle(m) => write!(f, ", displacement={} cc)", m.displacement),
            Vehicle::Truck(t) => write!(f, ", weight={} kg)", t.weight),
            Vehicle::Quad(q) => {
                write!(f, ", displacement={} cc, kind={})", q.displacement, q.kind.label())
            }
        }
    }
}

impl From<Automobile> for Vehicle {
    fn from(a: Automobile) -> Self {
        Vehicle::Automobile(a)
    }
}

impl From<Motorcycle> for Vehicle {
    fn from(m: Motorcycle) -> Self {
        Vehicle::Motorcycle(m)
    }
}

impl From<Truck> for Vehicle {
    fn from(t: Truck) -> Self {
        Vehicle::Truck(t)
    }
}

impl From<Quad> for Vehicle {
    fn from(q: Quad) -> Self {
        Vehicle::Quad(q)
    }
}
