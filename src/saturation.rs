//! The saturation curve (region 4) and saturation-line property pairs.
//!
//! The region-4 equation is a quadratic in disguise: with the scaled
//! temperature ϑ = T + n₉/(T - n₁₀) and β = (p/1 MPa)^¼ it reads
//! A(ϑ)β² + B(ϑ)β + C(ϑ) = 0, so both directions have closed forms.
use crate::equation_of_state::{gibbs_region1, gibbs_region2};
use crate::errors::{SteamError, SteamResult};
use crate::parameter::If97Parameters;

/// Saturation properties above this temperature are computed from the
/// region-1/2 Gibbs equations outside their range of true phase
/// equilibrium; results carry reduced accuracy.
pub const T_ACCURACY_LIMIT: f64 = 623.15;

/// A point on the saturation curve with a property of the coexisting
/// liquid and vapor phases.
///
/// Returned by the saturation-pair functions of [`Steam`](crate::Steam);
/// the generic parameter is `f64` for scalar queries and `Array1<f64>` for
/// array queries.
#[derive(Debug, Clone)]
pub struct SaturationState<T> {
    pub temperature: T,
    pub pressure: T,
    pub liquid: T,
    pub vapor: T,
}

/// Saturation pressure in bar for a temperature in [Tt, Tc].
pub fn saturation_pressure(parameters: &If97Parameters, temperature: f64) -> SteamResult<f64> {
    if temperature < parameters.tt {
        return Err(SteamError::BelowTriplePoint);
    }
    if temperature > parameters.tc {
        return Err(SteamError::AboveCriticalPoint);
    }
    let n = &parameters.r4;
    let theta = temperature + n[8] / (temperature - n[9]);
    let a = (theta + n[0]) * theta + n[1];
    let b = (n[2] * theta + n[3]) * theta + n[4];
    let c = (n[5] * theta + n[6]) * theta + n[7];
    let p_mpa = (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4);
    Ok(p_mpa * 10.0)
}

/// Saturation temperature in K for a pressure in [pt, pc].
pub fn saturation_temperature(parameters: &If97Parameters, pressure: f64) -> SteamResult<f64> {
    if pressure < parameters.pt {
        return Err(SteamError::BelowTriplePoint);
    }
    if pressure > parameters.pc {
        return Err(SteamError::AboveCriticalPoint);
    }
    let n = &parameters.r4;
    let beta = (pressure / 10.0).powf(0.25);
    // the quadratic coefficients appear permuted relative to ps
    let a = (beta + n[2]) * beta + n[5];
    let b = (n[0] * beta + n[3]) * beta + n[6];
    let c = (n[1] * beta + n[4]) * beta + n[7];
    // the opposite sign branch is the physical root of this direction
    let theta = 2.0 * c / (-b - (b * b - 4.0 * a * c).sqrt());
    let tt = n[9] + theta;
    Ok(0.5 * (tt - (tt * tt - 4.0 * (n[8] + n[9] * theta)).sqrt()))
}

/// Property of the coexisting phases, evaluated with region 1 for the
/// liquid and region 2 for the vapor member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SaturationProperty {
    Enthalpy,
    InternalEnergy,
    Density,
    Entropy,
}

/// Evaluate a saturation-line property pair (liquid, vapor) at a point
/// (T, p) on the curve.
pub(crate) fn saturation_pair(
    parameters: &If97Parameters,
    temperature: f64,
    pressure: f64,
    property: SaturationProperty,
) -> SteamResult<(f64, f64)> {
    let r = parameters.r;
    let assemble = |e: &crate::equation_of_state::GibbsEval| match property {
        SaturationProperty::Enthalpy => r * temperature * e.tau * e.gt,
        SaturationProperty::InternalEnergy => {
            r * temperature * (e.tau * e.gt - e.pi * e.gp)
        }
        SaturationProperty::Density => {
            pressure * 100.0 / (r * temperature * e.pi * e.gp)
        }
        SaturationProperty::Entropy => r * (e.tau * e.gt - e.g),
    };
    let liquid = assemble(&gibbs_region1(parameters, temperature, pressure, 1)?);
    let vapor = assemble(&gibbs_region2(parameters, temperature, pressure, 1)?);
    Ok((liquid, vapor))
}
