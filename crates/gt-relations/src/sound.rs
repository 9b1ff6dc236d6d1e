//! Local speed of sound.

use gt_core::Real;

/// `a = sqrt(γ R T)`.
///
/// With the air defaults (`R = 287 J/(kg·K)`) and `t` in kelvin the result is
/// in m/s. Negative temperatures give NaN.
#[inline]
pub fn speed_of_sound(t: Real, gamma: Real, gas_constant: Real) -> Real {
    (gamma * gas_constant * t).sqrt()
}
