//! Newton inversions of the region-3 Helmholtz formulation.
//!
//! Region 3 is parameterized on (T, ρ) while callers specify (T, p) or one
//! of (h, p), (s, p). No closed-form inverse exists, so the reduced density
//! (and, for the latter two, the reduced temperature) is recovered
//! iteratively from the pressure relation p = ρ R T δ f_δ.
use super::{helmholtz_region3, HelmholtzEval};
use crate::errors::{SteamError, SteamResult};
use crate::parameter::If97Parameters;
use crate::SolverOptions;

const MAX_ITER_REGION3: usize = 30;
const TOL_REGION3: f64 = 1e-6;

/// Reduced density floor; keeps the iteration away from the ln(δ) pole.
const DELTA_MIN: f64 = 1e-4;

/// Solve δ from (T, p) and return the converged Helmholtz evaluation.
///
/// One-dimensional Newton iteration on δ with residual δ²f_δ - π. The seed
/// is 500 kg/m³ on the vapor side and 650 kg/m³ on the liquid side of the
/// saturation curve; steps are limited to a fraction of the current iterate,
/// and where the pressure relation has negative slope (inside the
/// subcritical loop of the isotherm) the iterate is nudged monotonically
/// toward the target branch instead.
pub fn density_region3(
    parameters: &If97Parameters,
    temperature: f64,
    pressure: f64,
    options: SolverOptions,
) -> SteamResult<HelmholtzEval> {
    let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_REGION3, TOL_REGION3);
    let dc = parameters.dc;

    // dimensionless target pressure and inverse temperature
    let pi = pressure * 1e2 / (dc * parameters.r * temperature);
    let tau = parameters.tc / temperature;

    let liquid = temperature < parameters.tc
        && pressure >= crate::saturation::saturation_pressure(parameters, temperature)?;
    let mut delta = if liquid { 650.0 / dc } else { 500.0 / dc };

    log_iter!(verbosity, " iter |    residual    |    density     ");
    log_iter!(verbosity, "{:-<40}", "");
    for i in 1..=max_iter {
        let e = helmholtz_region3(parameters, delta, tau, 2)?;
        let residual = delta * delta * e.fd - pi;
        log_iter!(
            verbosity,
            " {:4} | {:14.8e} | {:12.8}",
            i,
            residual,
            delta * dc
        );
        if residual.abs() < tol * pi {
            log_result!(verbosity, "Region 3 density converged in {} step(s)\n", i);
            return Ok(e);
        }
        let slope = (2.0 * e.fd + delta * e.fdd) * delta;
        if slope <= 0.0 {
            // inside the loop of a subcritical isotherm
            delta *= if residual < 0.0 { 1.1 } else { 0.9 };
            continue;
        }
        let mut step = residual / slope;
        if step.abs() > 0.4 * delta {
            step = 0.4 * delta * step.signum();
        }
        delta = f64::max(delta - step, DELTA_MIN);
    }
    Err(SteamError::NotConverged(String::from("Region 3 density")))
}

/// Residual selector for the two-dimensional inversions.
#[derive(Clone, Copy)]
enum Target {
    /// Reduced enthalpy h/(R Tc).
    Enthalpy(f64),
    /// Reduced entropy s/R.
    Entropy(f64),
}

/// Solve (T, ρ) from (h, p). Seeds for temperature and density must be
/// supplied by the caller, interpolated from the region boundaries.
pub fn temperature_ph_region3(
    parameters: &If97Parameters,
    enthalpy: f64,
    pressure: f64,
    t_init: f64,
    d_init: f64,
    options: SolverOptions,
) -> SteamResult<(f64, f64)> {
    let target = Target::Enthalpy(enthalpy / (parameters.r * parameters.tc));
    newton_2d(parameters, pressure, target, t_init, d_init, options)
}

/// Solve (T, ρ) from (s, p). Seeds for temperature and density must be
/// supplied by the caller, interpolated from the region boundaries.
pub fn temperature_ps_region3(
    parameters: &If97Parameters,
    entropy: f64,
    pressure: f64,
    t_init: f64,
    d_init: f64,
    options: SolverOptions,
) -> SteamResult<(f64, f64)> {
    let target = Target::Entropy(entropy / parameters.r);
    newton_2d(parameters, pressure, target, t_init, d_init, options)
}

/// Damped two-dimensional Newton iteration on (δ, τ) matching the reduced
/// pressure together with a reduced enthalpy or entropy. The 2x2 linear
/// system is solved inline with Cramer's rule.
fn newton_2d(
    parameters: &If97Parameters,
    pressure: f64,
    target: Target,
    t_init: f64,
    d_init: f64,
    options: SolverOptions,
) -> SteamResult<(f64, f64)> {
    let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_REGION3, TOL_REGION3);
    let dc = parameters.dc;
    let tc = parameters.tc;

    // dimensionless target pressure, referenced to the critical temperature
    let pi = pressure * 1e2 / (dc * parameters.r * tc);
    let mut delta = d_init / dc;
    let mut tau = tc / t_init;

    let (label, goal) = match target {
        Target::Enthalpy(hh) => ("Region 3 T(h,p)", hh),
        Target::Entropy(ss) => ("Region 3 T(s,p)", ss),
    };

    log_iter!(verbosity, " iter |   p residual   |   temperature   |    density     ");
    log_iter!(verbosity, "{:-<60}", "");
    for i in 1..=max_iter {
        let e = helmholtz_region3(parameters, delta, tau, 2)?;
        let p_res = delta * delta * e.fd / tau - pi;
        let dpdd = delta / tau * (2.0 * e.fd + delta * e.fdd);
        let dpdt = delta * delta / tau * (e.fdt - e.fd / tau);
        let (res, drdd, drdt) = match target {
            Target::Enthalpy(hh) => (
                delta * e.fd / tau + e.ft - hh,
                e.fdt + (e.fd + delta * e.fdd) / tau,
                e.ftt + delta / tau * (e.fdt - e.fd / tau),
            ),
            Target::Entropy(ss) => (
                tau * e.ft - e.f - ss,
                tau * e.fdt - e.fd,
                tau * e.ftt,
            ),
        };
        log_iter!(
            verbosity,
            " {:4} | {:14.8e} | {:13.8} | {:12.8}",
            i,
            p_res,
            tc / tau,
            delta * dc
        );
        if p_res.abs() < tol * pi.abs() && res.abs() < tol * goal.abs() {
            log_result!(verbosity, "{} converged in {} step(s)\n", label, i);
            return Ok((tc / tau, delta * dc));
        }

        // Newton step from the 2x2 system, solved with Cramer's rule
        let det = dpdd * drdt - dpdt * drdd;
        let mut dd = (-p_res * drdt + res * dpdt) / det;
        let mut dt = (-res * dpdd + p_res * drdd) / det;

        // reduce the step if necessary
        if dd.abs() > 0.25 * delta {
            dd *= 0.25 * delta / dd.abs();
        }
        if dt.abs() > 0.1 * tau {
            dt *= 0.1 * tau / dt.abs();
        }
        delta = f64::max(delta + dd, DELTA_MIN);
        tau += dt;
    }
    Err(SteamError::NotConverged(String::from(match target {
        Target::Enthalpy(_) => "Region 3 T(h,p)",
        Target::Entropy(_) => "Region 3 T(s,p)",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn density_recovers_table_states() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        for &(t, rho, p) in [
            (650.0, 500.0, 255.837018),
            (650.0, 200.0, 222.930643),
            (750.0, 500.0, 783.095639),
        ]
        .iter()
        {
            let e = density_region3(&parameters, t, p, SolverOptions::default())?;
            assert_relative_eq!(e.delta * parameters.dc, rho, max_relative = 1e-5);
        }
        Ok(())
    }

    #[test]
    fn density_converges_on_the_dense_liquid_edge() -> SteamResult<()> {
        // just above 623.15 K the seed sits inside the subcritical loop
        let parameters = If97Parameters::new();
        let e = density_region3(&parameters, 623.65, 300.0, SolverOptions::default())?;
        let rho = e.delta * parameters.dc;
        let p = e.delta * e.fd * rho * parameters.r * 623.65 / 100.0;
        assert_relative_eq!(p, 300.0, max_relative = 1e-5);
        assert!(rho > 500.0);
        Ok(())
    }

    #[test]
    fn inverse_solvers_round_trip() -> SteamResult<()> {
        let parameters = If97Parameters::new();
        let r = parameters.r;
        for &(t, p) in [(650.0, 255.837018), (700.0, 400.0), (750.0, 783.095639)].iter() {
            let e = density_region3(&parameters, t, p, SolverOptions::default())?;
            let h = r * t * (e.delta * e.fd + e.tau * e.ft);
            let s = r * (e.tau * e.ft - e.f);
            let rho = e.delta * parameters.dc;
            let (t_h, d_h) = temperature_ph_region3(
                &parameters,
                h,
                p,
                t - 15.0,
                rho * 0.8,
                SolverOptions::default(),
            )?;
            assert_relative_eq!(t_h, t, max_relative = 1e-5);
            assert_relative_eq!(d_h, rho, max_relative = 1e-4);
            let (t_s, d_s) = temperature_ps_region3(
                &parameters,
                s,
                p,
                t - 15.0,
                rho * 0.8,
                SolverOptions::default(),
            )?;
            assert_relative_eq!(t_s, t, max_relative = 1e-5);
            assert_relative_eq!(d_s, rho, max_relative = 1e-4);
        }
        Ok(())
    }

    #[test]
    fn hopeless_targets_report_failure() {
        let parameters = If97Parameters::new();
        let result = temperature_ph_region3(
            &parameters,
            -5000.0,
            300.0,
            640.0,
            500.0,
            SolverOptions::default(),
        );
        assert!(matches!(result, Err(SteamError::NotConverged(_))));
    }
}
