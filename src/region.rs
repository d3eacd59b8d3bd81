//! Region boundaries and the (T, p) region classifier.
use crate::errors::{SteamError, SteamResult};
use crate::parameter::If97Parameters;
use crate::saturation::saturation_pressure;
use ndarray::{Array1, ArrayView1};

/// Temperature of the region-1/3 boundary in K.
pub const T13: f64 = 623.15;
/// Temperature at which the region-2/3 boundary reaches the upper pressure limit.
pub const T32: f64 = 863.15;
/// Temperature of the region-2/5 boundary in K.
pub const T25: f64 = 1073.15;
/// Lower temperature limit of the formulation in K.
pub const T_MIN: f64 = 273.15;
/// Upper temperature limit of the formulation in K.
pub const T_MAX: f64 = 2273.15;
/// Upper pressure limit of regions 1-3 in bar.
pub const P_MAX: f64 = 1000.0;
/// Upper pressure limit of region 5 in bar.
pub const P5_MAX: f64 = 500.0;

// 2b/2c discriminant of the backward equations, eqs. 20/21 with p in MPa
const B2BC: [f64; 5] = [
    905.84278514723,
    -0.67955786399241,
    0.00012809002730136,
    2652.6571908428,
    4.5257578905948,
];

/// The IF-97 regions of the (T, p) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Subcooled liquid.
    R1,
    /// Vapor.
    R2,
    /// Near-critical and supercritical, parameterized on (T, ρ).
    R3,
    /// High-temperature vapor.
    R5,
}

/// Pressure of the region-2/3 boundary in bar for a given temperature.
pub fn b23_pressure(parameters: &If97Parameters, temperature: f64) -> f64 {
    let n = &parameters.b23;
    (n[2] * temperature + n[1]) * temperature + n[0]
}

/// Temperature of the region-2/3 boundary in K for a given pressure in bar.
pub fn b23_temperature(parameters: &If97Parameters, pressure: f64) -> f64 {
    let n = &parameters.b23;
    n[3] + ((pressure - n[4]) / n[2]).sqrt()
}

/// Enthalpy on the 2b/2c boundary in kJ/kg for a given pressure in bar.
pub fn b2bc_enthalpy(pressure: f64) -> f64 {
    B2BC[3] + ((pressure / 10.0 - B2BC[4]) / B2BC[2]).sqrt()
}

/// Classify a single (T, p) state.
///
/// States outside every region are the error [`SteamError::OutOfRegion`].
pub fn classify(
    parameters: &If97Parameters,
    temperature: f64,
    pressure: f64,
) -> SteamResult<Region> {
    let invalid = Err(SteamError::OutOfRegion {
        temperature,
        pressure,
    });
    if pressure < 0.0 || temperature > T_MAX || temperature < T_MIN {
        return invalid;
    }
    if temperature > T25 {
        return if pressure > P5_MAX { invalid } else { Ok(Region::R5) };
    }
    // below the region-5 band the pressure must stay within the main limit
    if pressure > P_MAX {
        return invalid;
    }
    if temperature > T32 {
        return Ok(Region::R2);
    }
    if temperature > T13 {
        return if pressure < b23_pressure(parameters, temperature) {
            Ok(Region::R2)
        } else {
            Ok(Region::R3)
        };
    }
    if pressure < saturation_pressure(parameters, temperature.max(parameters.tt))? {
        Ok(Region::R2)
    } else {
        Ok(Region::R1)
    }
}

/// Classify every element of a (T, p) pair of equal-length arrays.
pub fn classify_array(
    parameters: &If97Parameters,
    temperature: ArrayView1<f64>,
    pressure: ArrayView1<f64>,
) -> SteamResult<Array1<Region>> {
    let mut regions = Vec::with_capacity(temperature.len());
    for (&t, &p) in temperature.iter().zip(pressure.iter()) {
        regions.push(classify(parameters, t, p)?);
    }
    Ok(Array1::from(regions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn b23_round_trip() {
        // eq. 5/6 verification point: T = 623.15 K, p = 16.5291643 MPa
        let parameters = If97Parameters::new();
        assert_relative_eq!(
            b23_pressure(&parameters, 623.15),
            165.291643,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            b23_temperature(&parameters, 165.291643),
            623.15,
            max_relative = 1e-8
        );
    }

    #[test]
    fn b2bc_verification_point() {
        // eq. 21 verification point: p = 100 MPa, h = 3516.004323 kJ/kg
        assert_relative_eq!(b2bc_enthalpy(1000.0), 3516.004323, max_relative = 1e-8);
    }

    #[test]
    fn classification_decision_tree() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        assert_eq!(classify(&parameters, 300.0, 30.0)?, Region::R1);
        assert_eq!(classify(&parameters, 300.0, 0.03)?, Region::R2);
        assert_eq!(classify(&parameters, 700.0, 300.0)?, Region::R2);
        assert_eq!(classify(&parameters, 900.0, 500.0)?, Region::R2);
        assert_eq!(classify(&parameters, 650.0, 255.837018)?, Region::R3);
        assert_eq!(classify(&parameters, 1500.0, 300.0)?, Region::R5);
        Ok(())
    }

    #[test]
    fn invalid_states_are_rejected() {
        let parameters = If97Parameters::new();
        assert!(classify(&parameters, 300.0, -1.0).is_err());
        assert!(classify(&parameters, 2300.0, 1.0).is_err());
        assert!(classify(&parameters, 1200.0, 600.0).is_err());
        assert!(classify(&parameters, 500.0, 1500.0).is_err());
        assert!(classify(&parameters, 100.0, 1.0).is_err());
    }

    #[test]
    fn every_valid_state_has_exactly_one_region() -> SteamResult<()> {
        // the decision tree is a partition by construction; spot-check the
        // seams between neighboring regions
        let parameters = If97Parameters::new();
        let eps = 1e-6;
        assert_eq!(classify(&parameters, T13 - eps, 200.0)?, Region::R1);
        assert_eq!(classify(&parameters, T13 + eps, 200.0)?, Region::R3);
        let p23 = b23_pressure(&parameters, 700.0);
        assert_eq!(classify(&parameters, 700.0, p23 - 1e-6)?, Region::R2);
        assert_eq!(classify(&parameters, 700.0, p23 + 1e-6)?, Region::R3);
        assert_eq!(classify(&parameters, T25 - eps, 400.0)?, Region::R2);
        assert_eq!(classify(&parameters, T25 + eps, 400.0)?, Region::R5);
        Ok(())
    }
}
