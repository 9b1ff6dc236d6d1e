//! Isentropic flow relations for a calorically-perfect gas.
//!
//! All ratios are stagnation-to-static (`P0/P`, `ρ0/ρ`, `T0/T`) except the
//! area relation, which is local-to-critical (`A/A*`).

use gt_core::Real;

/// `T0/T = 1 + (γ-1)/2 · M²`
#[inline]
pub fn temperature_ratio(mach: Real, gamma: Real) -> Real {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}

/// `P0/P = (T0/T)^(γ/(γ-1))`
#[inline]
pub fn pressure_ratio(mach: Real, gamma: Real) -> Real {
    temperature_ratio(mach, gamma).powf(gamma / (gamma - 1.0))
}

/// `ρ0/ρ = (T0/T)^(1/(γ-1))`
#[inline]
pub fn density_ratio(mach: Real, gamma: Real) -> Real {
    temperature_ratio(mach, gamma).powf(1.0 / (gamma - 1.0))
}

/// Area-Mach relation `A/A*`.
///
/// Two-valued in Mach: every `A/A* > 1` has one subsonic and one supersonic
/// root. Minimum of exactly 1 at `M = 1`; infinite at `M = 0`.
pub fn area_ratio(mach: Real, gamma: Real) -> Real {
    let base = (2.0 / (gamma + 1.0)) * temperature_ratio(mach, gamma);
    (base.powf((gamma + 1.0) / (gamma - 1.0)) / (mach * mach)).sqrt()
}

/// Stagnation pressure from a known static pressure.
#[inline]
pub fn stagnation_pressure(mach: Real, gamma: Real, p: Real) -> Real {
    p * pressure_ratio(mach, gamma)
}

/// Stagnation density from a known static density.
#[inline]
pub fn stagnation_density(mach: Real, gamma: Real, rho: Real) -> Real {
    rho * density_ratio(mach, gamma)
}

/// Stagnation temperature from a known static temperature.
#[inline]
pub fn stagnation_temperature(mach: Real, gamma: Real, t: Real) -> Real {
    t * temperature_ratio(mach, gamma)
}

/// `A/A*` divided by a known critical area.
///
/// Unlike the other known-value forms this divides rather than multiplies,
/// so the result is `A/A*²` in whatever units `a_star` carries, not the local
/// area `A = A* · (A/A*)`. Kept for compatibility with existing nozzle
/// worksheets; use [`area_ratio`] and multiply explicitly to get an area.
// TODO: decide with the worksheet owners whether this should become `a_star * area_ratio`.
#[inline]
pub fn area_ratio_over_critical(mach: Real, gamma: Real, a_star: Real) -> Real {
    area_ratio(mach, gamma) / a_star
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
    fn stagnation_state_at_rest() {
        assert_eq!(temperature_ratio(0.0, GAMMA), 1.0);
        assert_eq!(pressure_ratio(0.0, GAMMA), 1.0);
        assert_eq!(density_ratio(0.0, GAMMA), 1.0);
    }

    #[test]
    fn sonic_values_for_air() {
        assert!(close(temperature_ratio(1.0, GAMMA), 1.2));
        assert!(close(pressure_ratio(1.0, GAMMA), 1.892929));
        assert!(close(density_ratio(1.0, GAMMA), 1.577441));
        assert!(nearly_equal(
            area_ratio(1.0, GAMMA),
            1.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn area_ratio_at_mach_three() {
        assert!(close(area_ratio(3.0, GAMMA), 4.234568));
        assert!(close(area_ratio(2.0, GAMMA), 1.6875));
    }

    #[test]
    fn area_ratio_is_two_valued() {
        // A/A* = 2 at M ≈ 0.3059 and M ≈ 2.1972
        assert!(close(area_ratio(0.305904, GAMMA), 2.0));
        assert!(close(area_ratio(2.197198, GAMMA), 2.0));
    }

    #[test]
    fn area_ratio_at_rest_is_infinite() {
        assert!(area_ratio(0.0, GAMMA).is_infinite());
    }

    #[test]
    fn known_value_forms_scale() {
        assert!(close(stagnation_temperature(3.0, GAMMA, 300.0), 840.0));
        assert!(close(
            stagnation_pressure(2.0, GAMMA, 100e3),
            100e3 * pressure_ratio(2.0, GAMMA)
        ));
        assert!(close(
            stagnation_density(0.5, GAMMA, 1.2),
            1.2 * density_ratio(0.5, GAMMA)
        ));
    }

    #[test]
    fn area_known_value_divides() {
        let a = area_ratio(3.0, GAMMA);
        assert!(close(area_ratio_over_critical(3.0, GAMMA, 2.0), a / 2.0));
    }

    #[test]
    fn other_gamma() {
        // Monatomic gas: T0/T = 1 + M²/3
        assert!(close(temperature_ratio(3.0, 5.0 / 3.0), 4.0));
    }
}
