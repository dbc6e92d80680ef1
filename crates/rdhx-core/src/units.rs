// rdhx-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, MassRate as UomMassRate, Power as UomPower,
    Pressure as UomPressure, Ratio as UomRatio,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type SpecHeat = UomSpecificHeatCapacity;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Temperature difference in kelvin (equivalently, degrees Celsius).
#[inline]
pub fn dt_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

/// Difference `a - b` between two absolute temperatures.
///
/// uom keeps `ThermodynamicTemperature` and `TemperatureInterval` as
/// distinct kinds with no `Sub` between two absolute temperatures, so
/// the split is taken on the raw kelvin values.
#[inline]
pub fn delta(a: Temperature, b: Temperature) -> TempInterval {
    dt_k(a.value - b.value)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

/// Volumetric flow in m³/h, the catalog's native flow unit.
#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_hour;
    VolumeRate::new::<cubic_meter_per_hour>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn mpas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::millipascal_second;
    DynVisc::new::<millipascal_second>(v)
}

#[inline]
pub fn kj_per_kg_k(v: f64) -> SpecHeat {
    use uom::si::specific_heat_capacity::kilojoule_per_kilogram_kelvin;
    SpecHeat::new::<kilojoule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Extract a volumetric flow in m³/h from a canonical `VolumeRate`.
#[inline]
pub fn as_m3ph(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_hour;
    q.get::<cubic_meter_per_hour>()
}

/// Extract a temperature in °C from a canonical `Temperature`.
#[inline]
pub fn as_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// Extract a pressure in kPa from a canonical `Pressure`.
#[inline]
pub fn as_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

/// Extract a power in kW from a canonical `Power`.
#[inline]
pub fn as_kw(p: Power) -> f64 {
    use uom::si::power::kilowatt;
    p.get::<kilowatt>()
}

/// Extract a specific heat in kJ/(kg·K) from a canonical `SpecHeat`.
#[inline]
pub fn as_kj_per_kg_k(c: SpecHeat) -> f64 {
    use uom::si::specific_heat_capacity::kilojoule_per_kilogram_kelvin;
    c.get::<kilojoule_per_kilogram_kelvin>()
}

pub mod constants {
    /// Standard gravity [m/s²]
    pub const G0_MPS2: f64 = 9.806_65;

    /// Molar mass of dry air [kg/mol]
    pub const AIR_MOLAR_MASS_KG_PER_MOL: f64 = 0.028_964_4;

    /// Universal gas constant [J/(mol·K)]
    pub const R_UNIVERSAL_J_PER_MOL_K: f64 = 8.314_462_618;

    /// Reference air density at sea level, 20 °C [kg/m³]
    pub const AIR_DENSITY_SEA_LEVEL_KGPM3: f64 = 1.2;

    /// Specific heat of air at 20 °C [kJ/(kg·K)]
    pub const AIR_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 1.005;

    /// BTU/h per kW, for EER reporting
    pub const BTU_PER_H_PER_KW: f64 = 3412.14;

    /// European reference supply voltage for fan curves [V]
    pub const REFERENCE_VOLTAGE_V: f64 = 230.0;
}
