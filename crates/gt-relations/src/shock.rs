//! Normal shock jump conditions.
//!
//! `mach1` is the upstream Mach number. Nothing here checks `mach1 >= 1`; for
//! subsonic input the formulas still evaluate and return a mathematically
//! defined but physically meaningless value, or NaN once
//! `mach1 < sqrt((γ-1)/(2γ))`. Use [`crate::Gas::normal_shock`] for a checked
//! evaluation.

use crate::isentropic;
use gt_core::Real;

/// Downstream Mach number `M2`.
pub fn mach2(mach1: Real, gamma: Real) -> Real {
    let m1_sq = mach1 * mach1;
    let num = 1.0 + 0.5 * (gamma - 1.0) * m1_sq;
    let den = gamma * m1_sq - 0.5 * (gamma - 1.0);
    (num / den).sqrt()
}

/// Static density ratio `ρ2/ρ1`.
#[inline]
pub fn density_ratio(mach1: Real, gamma: Real) -> Real {
    let m1_sq = mach1 * mach1;
    (gamma + 1.0) * m1_sq / (2.0 + (gamma - 1.0) * m1_sq)
}

/// Static pressure ratio `P2/P1`.
#[inline]
pub fn pressure_ratio(mach1: Real, gamma: Real) -> Real {
    1.0 + (2.0 * gamma / (gamma + 1.0)) * (mach1 * mach1 - 1.0)
}

/// Static temperature ratio `T2/T1`.
#[inline]
pub fn temperature_ratio(mach1: Real, gamma: Real) -> Real {
    let m1_sq = mach1 * mach1;
    pressure_ratio(mach1, gamma) * (2.0 + (gamma - 1.0) * m1_sq) / ((gamma + 1.0) * m1_sq)
}

/// Downstream stagnation to upstream static pressure `P02/P1` (pitot relation).
pub fn pitot_pressure_ratio(mach1: Real, gamma: Real) -> Real {
    isentropic::pressure_ratio(mach2(mach1, gamma), gamma) * pressure_ratio(mach1, gamma)
}

/// Stagnation pressure ratio across the shock `P02/P01`.
pub fn stagnation_pressure_ratio(mach1: Real, gamma: Real) -> Real {
    pitot_pressure_ratio(mach1, gamma) / isentropic::pressure_ratio(mach1, gamma)
}

/// Density behind the shock from a known upstream density.
#[inline]
pub fn downstream_density(mach1: Real, gamma: Real, rho1: Real) -> Real {
    rho1 * density_ratio(mach1, gamma)
}

/// Pressure behind the shock from a known upstream pressure.
#[inline]
pub fn downstream_pressure(mach1: Real, gamma: Real, p1: Real) -> Real {
    p1 * pressure_ratio(mach1, gamma)
}

/// Temperature behind the shock from a known upstream temperature.
#[inline]
pub fn downstream_temperature(mach1: Real, gamma: Real, t1: Real) -> Real {
    t1 * temperature_ratio(mach1, gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::{Tolerances, nearly_equal};

    const GAMMA: Real = 1.4;

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(a, b, Tolerances::rel(1e-4))
    }

    #[test]
    fn sonic_shock_is_identity() {
        let tol = Tolerances::default();
        assert!(nearly_equal(mach2(1.0, GAMMA), 1.0, tol));
        assert!(nearly_equal(pressure_ratio(1.0, GAMMA), 1.0, tol));
        assert!(nearly_equal(density_ratio(1.0, GAMMA), 1.0, tol));
        assert!(nearly_equal(temperature_ratio(1.0, GAMMA), 1.0, tol));
        assert!(nearly_equal(stagnation_pressure_ratio(1.0, GAMMA), 1.0, tol));
    }

    #[test]
    fn mach_three_air() {
        assert!(close(mach2(3.0, GAMMA), 0.475191));
        assert!(close(pressure_ratio(3.0, GAMMA), 10.333333));
        assert!(close(density_ratio(3.0, GAMMA), 3.857143));
        assert!(close(temperature_ratio(3.0, GAMMA), 2.679012));
        assert!(close(stagnation_pressure_ratio(3.0, GAMMA), 0.328344));
        assert!(close(pitot_pressure_ratio(3.0, GAMMA), 12.060965));
    }

    #[test]
    fn temperature_ratio_matches_state_equation() {
        // T2/T1 = (P2/P1) / (ρ2/ρ1)
        for m1 in [1.2, 2.0, 4.5] {
            let t = pressure_ratio(m1, GAMMA) / density_ratio(m1, GAMMA);
            assert!(close(temperature_ratio(m1, GAMMA), t));
        }
    }

    #[test]
    fn strong_shock_limits() {
        let m1 = 1e4;
        assert!(close(density_ratio(m1, GAMMA), (GAMMA + 1.0) / (GAMMA - 1.0)));
        assert!(close(mach2(m1, GAMMA), ((GAMMA - 1.0) / (2.0 * GAMMA)).sqrt()));
    }

    #[test]
    fn deep_subsonic_input_is_nan() {
        assert!(mach2(0.2, GAMMA).is_nan());
    }

    #[test]
    fn known_value_forms_scale() {
        assert!(close(downstream_pressure(3.0, GAMMA, 1e5), 1e5 * 10.333333));
        assert!(close(downstream_temperature(3.0, GAMMA, 300.0), 803.7037));
        assert!(close(downstream_density(3.0, GAMMA, 1.0), 3.857143));
    }
}
