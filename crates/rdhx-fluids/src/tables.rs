//! Tabulated coolant property data.
//!
//! Base properties are for water at 20 °C. Glycol mixtures apply
//! dimensionless concentration factors tabulated at volume-percentage
//! breakpoints; values between breakpoints are linearly interpolated and
//! queries past the last breakpoint clamp to it.

/// Water at 20 °C: density [kg/m³], specific heat [kJ/(kg·K)],
/// dynamic viscosity [mPa·s].
pub(crate) const WATER_DENSITY_KGPM3: f64 = 998.2;
pub(crate) const WATER_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 4.182;
pub(crate) const WATER_VISCOSITY_MPAS: f64 = 1.002;
pub(crate) const WATER_FREEZING_POINT_C: f64 = 0.0;

/// Glycol concentration breakpoints [% by volume].
pub(crate) const GLYCOL_BREAKPOINTS_PCT: [f64; 7] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0];

/// Concentration-factor rows for one glycol family.
pub(crate) struct GlycolTable {
    pub density_factor: [f64; 7],
    pub specific_heat_factor: [f64; 7],
    pub viscosity_factor: [f64; 7],
    pub freezing_point_c: [f64; 7],
}

pub(crate) const ETHYLENE_GLYCOL: GlycolTable = GlycolTable {
    density_factor: [1.0, 1.02, 1.03, 1.05, 1.07, 1.09, 1.10],
    specific_heat_factor: [1.0, 0.97, 0.94, 0.91, 0.88, 0.84, 0.80],
    viscosity_factor: [1.0, 1.1, 1.3, 1.8, 2.4, 3.8, 5.7],
    freezing_point_c: [0.0, -3.0, -8.0, -15.0, -24.0, -36.0, -52.0],
};

pub(crate) const PROPYLENE_GLYCOL: GlycolTable = GlycolTable {
    density_factor: [1.0, 1.01, 1.02, 1.03, 1.04, 1.05, 1.06],
    specific_heat_factor: [1.0, 0.97, 0.95, 0.92, 0.88, 0.84, 0.79],
    viscosity_factor: [1.0, 1.2, 1.5, 2.2, 3.2, 5.2, 8.6],
    freezing_point_c: [0.0, -3.0, -7.0, -13.0, -21.0, -33.0, -48.0],
};
