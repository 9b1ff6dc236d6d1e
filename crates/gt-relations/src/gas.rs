//! Calorically-perfect gas model with checked and unit-aware wrappers.

use crate::error::{RelationError, RelationResult, finite};
use crate::{isentropic, shock, sound};
use gt_core::Real;
use gt_core::constants::{GAMMA_AIR, R_AIR};
use gt_core::units::{Density, Pressure, Temperature, Velocity, k, kgpm3, mps, pa};
use serde::{Deserialize, Serialize};

/// Ideal gas with constant specific heat ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gas {
    /// Specific heat ratio γ = cp/cv
    pub gamma: Real,
    /// Specific gas constant R [J/(kg·K)]
    pub gas_constant: Real,
}

impl Default for Gas {
    fn default() -> Self {
        Self::AIR
    }
}

/// Every isentropic ratio at one Mach number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsentropicState {
    pub mach: Real,
    /// P0/P
    pub pressure_ratio: Real,
    /// ρ0/ρ
    pub density_ratio: Real,
    /// T0/T
    pub temperature_ratio: Real,
    /// A/A*
    pub area_ratio: Real,
}

/// Every jump condition across one normal shock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalShock {
    pub mach1: Real,
    pub mach2: Real,
    /// P2/P1
    pub pressure_ratio: Real,
    /// ρ2/ρ1
    pub density_ratio: Real,
    /// T2/T1
    pub temperature_ratio: Real,
    /// P02/P01
    pub stagnation_pressure_ratio: Real,
    /// P02/P1
    pub pitot_pressure_ratio: Real,
}

impl Gas {
    /// Diatomic air, γ = 1.4, R = 287 J/(kg·K).
    pub const AIR: Gas = Gas {
        gamma: GAMMA_AIR,
        gas_constant: R_AIR,
    };

    pub fn new(gamma: Real, gas_constant: Real) -> RelationResult<Self> {
        let gas = Self {
            gamma,
            gas_constant,
        };
        gas.validate()?;
        Ok(gas)
    }

    /// Reject values for which the relations divide by zero or go complex.
    pub fn validate(&self) -> RelationResult<()> {
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(RelationError::InvalidGas {
                what: "gamma must be > 1 and finite",
            });
        }
        if !self.gas_constant.is_finite() || self.gas_constant <= 0.0 {
            return Err(RelationError::InvalidGas {
                what: "gas constant must be positive and finite",
            });
        }
        Ok(())
    }

    /// All isentropic ratios at `mach`. Requires `mach > 0`.
    pub fn isentropic(&self, mach: Real) -> RelationResult<IsentropicState> {
        if !mach.is_finite() || mach <= 0.0 {
            return Err(RelationError::Domain {
                what: "mach number",
                value: mach,
            });
        }
        let g = self.gamma;
        Ok(IsentropicState {
            mach,
            pressure_ratio: finite(isentropic::pressure_ratio(mach, g), "P0/P")?,
            density_ratio: finite(isentropic::density_ratio(mach, g), "rho0/rho")?,
            temperature_ratio: finite(isentropic::temperature_ratio(mach, g), "T0/T")?,
            area_ratio: finite(isentropic::area_ratio(mach, g), "A/A*")?,
        })
    }

    /// All jump conditions for upstream Mach `mach1`. Requires `mach1 >= 1`.
    pub fn normal_shock(&self, mach1: Real) -> RelationResult<NormalShock> {
        if !mach1.is_finite() || mach1 < 1.0 {
            return Err(RelationError::Domain {
                what: "upstream mach number",
                value: mach1,
            });
        }
        let g = self.gamma;
        Ok(NormalShock {
            mach1,
            mach2: finite(shock::mach2(mach1, g), "M2")?,
            pressure_ratio: finite(shock::pressure_ratio(mach1, g), "P2/P1")?,
            density_ratio: finite(shock::density_ratio(mach1, g), "rho2/rho1")?,
            temperature_ratio: finite(shock::temperature_ratio(mach1, g), "T2/T1")?,
            stagnation_pressure_ratio: finite(shock::stagnation_pressure_ratio(mach1, g), "P02/P01")?,
            pitot_pressure_ratio: finite(shock::pitot_pressure_ratio(mach1, g), "P02/P1")?,
        })
    }

    /// Local speed of sound at static temperature `t`.
    pub fn sound_speed(&self, t: Temperature) -> RelationResult<Velocity> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(RelationError::Domain {
                what: "temperature",
                value: t.value,
            });
        }
        let a = sound::speed_of_sound(t.value, self.gamma, self.gas_constant);
        Ok(mps(finite(a, "speed of sound")?))
    }

    /// Mach number of a flow moving at `u` through gas at temperature `t`.
    pub fn mach_number(&self, u: Velocity, t: Temperature) -> RelationResult<Real> {
        let a = self.sound_speed(t)?;
        finite(u.value / a.value, "mach number")
    }

    pub fn stagnation_pressure(&self, mach: Real, p: Pressure) -> Pressure {
        pa(isentropic::stagnation_pressure(mach, self.gamma, p.value))
    }

    pub fn stagnation_density(&self, mach: Real, rho: Density) -> Density {
        kgpm3(isentropic::stagnation_density(mach, self.gamma, rho.value))
    }

    pub fn stagnation_temperature(&self, mach: Real, t: Temperature) -> Temperature {
        k(isentropic::stagnation_temperature(mach, self.gamma, t.value))
    }

    /// Static pressure at `mach` in a flow with stagnation pressure `p0`.
    pub fn static_pressure(&self, mach: Real, p0: Pressure) -> Pressure {
        pa(p0.value / isentropic::pressure_ratio(mach, self.gamma))
    }

    /// Static temperature at `mach` in a flow with stagnation temperature `t0`.
    pub fn static_temperature(&self, mach: Real, t0: Temperature) -> Temperature {
        k(t0.value / isentropic::temperature_ratio(mach, self.gamma))
    }

    pub fn downstream_pressure(&self, mach1: Real, p1: Pressure) -> Pressure {
        pa(shock::downstream_pressure(mach1, self.gamma, p1.value))
    }

    pub fn downstream_density(&self, mach1: Real, rho1: Density) -> Density {
        kgpm3(shock::downstream_density(mach1, self.gamma, rho1.value))
    }

    pub fn downstream_temperature(&self, mach1: Real, t1: Temperature) -> Temperature {
        k(shock::downstream_temperature(mach1, self.gamma, t1.value))
    }
}
