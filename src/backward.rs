//! Explicit backward equations T(h, p) and T(s, p) for regions 1 and 2.
//!
//! These avoid any iteration: each is a single order-0 polynomial
//! evaluation in shifted reduced coordinates. Region 2 is split into the
//! sub-regions 2a (p ≤ 40 bar), 2b and 2c, separated by the b2bc
//! discriminant for enthalpy and by σ = 5.85 kJ/kg/K for entropy.
use crate::errors::SteamResult;
use crate::parameter::If97Parameters;
use crate::polynomial::peval;
use crate::region::b2bc_enthalpy;

/// Entropy on the 2b/2c boundary in kJ/kg/K.
const S2BC: f64 = 5.85;

/// Temperature in K from enthalpy and pressure in region 1.
pub fn temperature_ph_region1(
    parameters: &If97Parameters,
    enthalpy: f64,
    pressure: f64,
) -> SteamResult<f64> {
    let eta = enthalpy / 2500.0;
    let pi = pressure / 10.0;
    Ok(peval(pi, eta + 1.0, &parameters.th1, 0)?.p)
}

/// Temperature in K from entropy and pressure in region 1.
pub fn temperature_ps_region1(
    parameters: &If97Parameters,
    entropy: f64,
    pressure: f64,
) -> SteamResult<f64> {
    let pi = pressure / 10.0;
    Ok(peval(pi, entropy + 2.0, &parameters.ts1, 0)?.p)
}

/// Temperature in K from enthalpy and pressure in region 2.
///
/// Selects the sub-region from the pressure and the b2bc discriminant.
pub fn temperature_ph_region2(
    parameters: &If97Parameters,
    enthalpy: f64,
    pressure: f64,
) -> SteamResult<f64> {
    let eta = enthalpy / 2000.0;
    let pi = pressure / 10.0;
    let e = if pressure <= 40.0 {
        peval(pi, eta - 2.1, &parameters.th2a, 0)?
    } else if enthalpy >= b2bc_enthalpy(pressure) {
        peval(pi - 2.0, eta - 2.6, &parameters.th2b, 0)?
    } else {
        peval(pi + 25.0, eta - 1.8, &parameters.th2c, 0)?
    };
    Ok(e.p)
}

/// Temperature in K from entropy and pressure in region 2.
pub fn temperature_ps_region2(
    parameters: &If97Parameters,
    entropy: f64,
    pressure: f64,
) -> SteamResult<f64> {
    let pi = pressure / 10.0;
    let e = if pressure <= 40.0 {
        peval(pi.powf(0.25), entropy / 2.0 - 2.0, &parameters.ts2a, 0)?
    } else if entropy >= S2BC {
        peval(pi, 10.0 - entropy / 0.7853, &parameters.ts2b, 0)?
    } else {
        peval(pi, 2.0 - entropy / 2.9251, &parameters.ts2c, 0)?
    };
    Ok(e.p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn region1_ph_verification_states() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        assert_relative_eq!(
            temperature_ph_region1(&parameters, 500.0, 30.0)?,
            391.798509,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region1(&parameters, 500.0, 800.0)?,
            378.108626,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region1(&parameters, 1500.0, 800.0)?,
            611.041229,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn region1_ps_verification_states() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        assert_relative_eq!(
            temperature_ps_region1(&parameters, 0.5, 30.0)?,
            307.842258,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region1(&parameters, 0.5, 800.0)?,
            309.979785,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region1(&parameters, 3.0, 800.0)?,
            565.899909,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn region2_ph_verification_states() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        // 2a
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 3000.0, 0.01)?,
            534.433241,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 3000.0, 30.0)?,
            575.373370,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 4000.0, 30.0)?,
            1010.77577,
            max_relative = 1e-8
        );
        // 2b
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 3500.0, 50.0)?,
            801.299102,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 4000.0, 50.0)?,
            1015.31583,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 3500.0, 250.0)?,
            875.279054,
            max_relative = 1e-8
        );
        // 2c
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 2700.0, 400.0)?,
            743.056411,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 2700.0, 600.0)?,
            791.137067,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ph_region2(&parameters, 3200.0, 600.0)?,
            882.756860,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn region2_ps_verification_states() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        // 2a
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 7.5, 1.0)?,
            399.517097,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 8.0, 1.0)?,
            514.127081,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 8.0, 25.0)?,
            1039.84917,
            max_relative = 1e-8
        );
        // 2b
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 6.0, 80.0)?,
            600.484040,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 7.5, 80.0)?,
            1064.95556,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 6.0, 900.0)?,
            1038.01126,
            max_relative = 1e-6
        );
        // 2c
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 5.75, 200.0)?,
            697.992849,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 5.25, 800.0)?,
            854.011484,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            temperature_ps_region2(&parameters, 5.75, 800.0)?,
            949.017998,
            max_relative = 1e-8
        );
        Ok(())
    }
}
