//! The user-facing property facade.
//!
//! [`Steam`] owns a shared coefficient bundle and exposes the property
//! functions of the formulation for scalar and rank-1 array inputs. Array
//! inputs are broadcast against each other (length 1 against length n),
//! classified elementwise, partitioned into region-homogeneous batches,
//! evaluated per region, and scattered back into the output.
use crate::backward;
use crate::equation_of_state::{
    gibbs_region1, gibbs_region2, gibbs_region5, GibbsEval, HelmholtzEval,
};
use crate::errors::{SteamError, SteamResult};
use crate::parameter::If97Parameters;
use crate::region::{self, Region, P_MAX, T13};
use crate::saturation::{
    saturation_pair, saturation_pressure, saturation_temperature, SaturationProperty,
    SaturationState, T_ACCURACY_LIMIT,
};
use crate::SolverOptions;
use ndarray::Array1;
use std::rc::Rc;

/// Specification of a point on the saturation curve by either of its
/// coordinates.
#[derive(Debug, Clone, Copy)]
pub enum TpSpec<T> {
    Temperature(T),
    Pressure(T),
}

/// Defaults consumed from the host configuration, used when a saturation
/// query supplies no coordinate.
#[derive(Debug, Clone, Copy)]
pub struct SteamConfig {
    /// Default temperature in K.
    pub default_temperature: f64,
    /// Default pressure in bar.
    pub default_pressure: f64,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            default_temperature: 300.0,
            default_pressure: 1.01325,
        }
    }
}

/// Properties assembled from the derivatives of a fundamental equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Enthalpy,
    Entropy,
    Density,
    InternalEnergy,
    IsobaricHeatCapacity,
    IsochoricHeatCapacity,
}

impl Property {
    /// Derivative order of the fundamental equation needed for assembly.
    fn order(&self) -> usize {
        match self {
            Self::IsobaricHeatCapacity | Self::IsochoricHeatCapacity => 2,
            _ => 1,
        }
    }
}

/// Evaluated fundamental equation of one state point.
enum RegionEval {
    Gibbs(GibbsEval),
    Helmholtz(HelmholtzEval),
}

const REGIONS: [Region; 4] = [Region::R1, Region::R2, Region::R3, Region::R5];

/// The IF-97 property engine for water and steam.
///
/// Purely functional and stateless after construction; the coefficient
/// bundle is shared read-only.
pub struct Steam {
    parameters: Rc<If97Parameters>,
    config: SteamConfig,
}

impl Default for Steam {
    fn default() -> Self {
        Self::new(Rc::new(If97Parameters::new()))
    }
}

impl Steam {
    pub fn new(parameters: Rc<If97Parameters>) -> Self {
        Self {
            parameters,
            config: SteamConfig::default(),
        }
    }

    pub fn with_config(parameters: Rc<If97Parameters>, config: SteamConfig) -> Self {
        Self { parameters, config }
    }

    /// The coefficient bundle of this engine.
    pub fn parameters(&self) -> &If97Parameters {
        &self.parameters
    }

    /// Critical point (Tc, pc) in K and bar.
    pub fn critical(&self) -> (f64, f64) {
        (self.parameters.tc, self.parameters.pc)
    }

    /// Triple point (Tt, pt) in K and bar.
    pub fn triple(&self) -> (f64, f64) {
        (self.parameters.tt, self.parameters.pt)
    }

    /// Molar mass in kg/kmol.
    pub fn mw(&self) -> f64 {
        self.parameters.mw
    }

    /// Saturation pressure in bar.
    pub fn ps(&self, temperature: f64) -> SteamResult<f64> {
        saturation_pressure(&self.parameters, temperature)
    }

    /// Saturation temperature in K.
    pub fn ts(&self, pressure: f64) -> SteamResult<f64> {
        saturation_temperature(&self.parameters, pressure)
    }

    /// Saturation pressure at the configured default temperature.
    pub fn ps_default(&self) -> SteamResult<f64> {
        self.ps(self.config.default_temperature)
    }

    /// Saturation temperature at the configured default pressure.
    pub fn ts_default(&self) -> SteamResult<f64> {
        self.ts(self.config.default_pressure)
    }

    /// Elementwise saturation pressure in bar.
    pub fn ps_array(&self, temperature: &Array1<f64>) -> SteamResult<Array1<f64>> {
        temperature.iter().map(|&t| self.ps(t)).collect()
    }

    /// Elementwise saturation temperature in K.
    pub fn ts_array(&self, pressure: &Array1<f64>) -> SteamResult<Array1<f64>> {
        pressure.iter().map(|&p| self.ts(p)).collect()
    }

    /// Saturation enthalpy pair in kJ/kg.
    pub fn hs(&self, spec: Option<TpSpec<f64>>) -> SteamResult<SaturationState<f64>> {
        self.saturation_state(spec, SaturationProperty::Enthalpy)
    }

    /// Saturation internal energy pair in kJ/kg.
    pub fn es(&self, spec: Option<TpSpec<f64>>) -> SteamResult<SaturationState<f64>> {
        self.saturation_state(spec, SaturationProperty::InternalEnergy)
    }

    /// Saturation density pair in kg/m³.
    pub fn ds(&self, spec: Option<TpSpec<f64>>) -> SteamResult<SaturationState<f64>> {
        self.saturation_state(spec, SaturationProperty::Density)
    }

    /// Saturation entropy pair in kJ/kg/K.
    pub fn ss(&self, spec: Option<TpSpec<f64>>) -> SteamResult<SaturationState<f64>> {
        self.saturation_state(spec, SaturationProperty::Entropy)
    }

    /// Elementwise saturation enthalpy pairs.
    pub fn hs_array(&self, spec: TpSpec<&Array1<f64>>) -> SteamResult<SaturationState<Array1<f64>>> {
        self.saturation_state_array(spec, SaturationProperty::Enthalpy)
    }

    /// Elementwise saturation internal energy pairs.
    pub fn es_array(&self, spec: TpSpec<&Array1<f64>>) -> SteamResult<SaturationState<Array1<f64>>> {
        self.saturation_state_array(spec, SaturationProperty::InternalEnergy)
    }

    /// Elementwise saturation density pairs.
    pub fn ds_array(&self, spec: TpSpec<&Array1<f64>>) -> SteamResult<SaturationState<Array1<f64>>> {
        self.saturation_state_array(spec, SaturationProperty::Density)
    }

    /// Elementwise saturation entropy pairs.
    pub fn ss_array(&self, spec: TpSpec<&Array1<f64>>) -> SteamResult<SaturationState<Array1<f64>>> {
        self.saturation_state_array(spec, SaturationProperty::Entropy)
    }

    /// Specific enthalpy in kJ/kg.
    pub fn h(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::Enthalpy, temperature, pressure)
    }

    /// Specific entropy in kJ/kg/K.
    pub fn s(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::Entropy, temperature, pressure)
    }

    /// Density in kg/m³.
    pub fn d(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::Density, temperature, pressure)
    }

    /// Specific internal energy in kJ/kg.
    pub fn e(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::InternalEnergy, temperature, pressure)
    }

    /// Specific isobaric heat capacity in kJ/kg/K.
    pub fn cp(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::IsobaricHeatCapacity, temperature, pressure)
    }

    /// Specific isochoric heat capacity in kJ/kg/K.
    pub fn cv(&self, temperature: f64, pressure: f64) -> SteamResult<f64> {
        self.property(Property::IsochoricHeatCapacity, temperature, pressure)
    }

    /// Elementwise specific enthalpy.
    pub fn h_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::Enthalpy, t, p)
    }

    /// Elementwise specific entropy.
    pub fn s_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::Entropy, t, p)
    }

    /// Elementwise density.
    pub fn d_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::Density, t, p)
    }

    /// Elementwise specific internal energy.
    pub fn e_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::InternalEnergy, t, p)
    }

    /// Elementwise specific isobaric heat capacity.
    pub fn cp_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::IsobaricHeatCapacity, t, p)
    }

    /// Elementwise specific isochoric heat capacity.
    pub fn cv_array(&self, t: &Array1<f64>, p: &Array1<f64>) -> SteamResult<Array1<f64>> {
        self.property_array(Property::IsochoricHeatCapacity, t, p)
    }

    /// Two-phase specific enthalpy at a quality x in [0, 1].
    pub fn h_quality(&self, spec: Option<TpSpec<f64>>, quality: f64) -> SteamResult<f64> {
        self.quality_property(spec, quality, SaturationProperty::Enthalpy)
    }

    /// Two-phase specific entropy at a quality x in [0, 1].
    pub fn s_quality(&self, spec: Option<TpSpec<f64>>, quality: f64) -> SteamResult<f64> {
        self.quality_property(spec, quality, SaturationProperty::Entropy)
    }

    /// Two-phase density at a quality x in [0, 1].
    pub fn d_quality(&self, spec: Option<TpSpec<f64>>, quality: f64) -> SteamResult<f64> {
        self.quality_property(spec, quality, SaturationProperty::Density)
    }

    /// Two-phase specific internal energy at a quality x in [0, 1].
    pub fn e_quality(&self, spec: Option<TpSpec<f64>>, quality: f64) -> SteamResult<f64> {
        self.quality_property(spec, quality, SaturationProperty::InternalEnergy)
    }

    /// Elementwise two-phase specific enthalpy.
    pub fn h_quality_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        quality: &Array1<f64>,
    ) -> SteamResult<Array1<f64>> {
        self.quality_property_array(spec, quality, SaturationProperty::Enthalpy)
    }

    /// Elementwise two-phase specific entropy.
    pub fn s_quality_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        quality: &Array1<f64>,
    ) -> SteamResult<Array1<f64>> {
        self.quality_property_array(spec, quality, SaturationProperty::Entropy)
    }

    /// Elementwise two-phase density.
    pub fn d_quality_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        quality: &Array1<f64>,
    ) -> SteamResult<Array1<f64>> {
        self.quality_property_array(spec, quality, SaturationProperty::Density)
    }

    /// Elementwise two-phase specific internal energy.
    pub fn e_quality_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        quality: &Array1<f64>,
    ) -> SteamResult<Array1<f64>> {
        self.quality_property_array(spec, quality, SaturationProperty::InternalEnergy)
    }

    /// Enthalpy, entropy and density in a single region dispatch.
    pub fn hsd(&self, temperature: f64, pressure: f64) -> SteamResult<(f64, f64, f64)> {
        let region = region::classify(&self.parameters, temperature, pressure)?;
        let e = self.eval_region(region, temperature, pressure, 1)?;
        Ok((
            self.assemble(Property::Enthalpy, &e, temperature, pressure),
            self.assemble(Property::Entropy, &e, temperature, pressure),
            self.assemble(Property::Density, &e, temperature, pressure),
        ))
    }

    /// Two-phase enthalpy, entropy and density at a quality x in [0, 1],
    /// sharing a single evaluation of the coexisting phases.
    pub fn hsd_quality(
        &self,
        spec: Option<TpSpec<f64>>,
        quality: f64,
    ) -> SteamResult<(f64, f64, f64)> {
        check_quality(quality)?;
        let (t, p) = self.resolve_saturation(spec)?;
        self.warn_accuracy(t);
        let liquid = RegionEval::Gibbs(gibbs_region1(&self.parameters, t, p, 1)?);
        let vapor = RegionEval::Gibbs(gibbs_region2(&self.parameters, t, p, 1)?);
        let mix = |property: Property| {
            let l = self.assemble(property, &liquid, t, p);
            let v = self.assemble(property, &vapor, t, p);
            l + (v - l) * quality
        };
        Ok((
            mix(Property::Enthalpy),
            mix(Property::Entropy),
            mix(Property::Density),
        ))
    }

    /// Elementwise enthalpy, entropy and density in a single dispatch pass.
    pub fn hsd_array(
        &self,
        t: &Array1<f64>,
        p: &Array1<f64>,
    ) -> SteamResult<(Array1<f64>, Array1<f64>, Array1<f64>)> {
        let (t, p) = broadcast_pair(t, p)?;
        let regions = region::classify_array(&self.parameters, t.view(), p.view())?;
        let mut h = Array1::zeros(t.len());
        let mut s = Array1::zeros(t.len());
        let mut d = Array1::zeros(t.len());
        for &target in REGIONS.iter() {
            for i in batch(&regions, target) {
                let e = self.eval_region(target, t[i], p[i], 1)?;
                h[i] = self.assemble(Property::Enthalpy, &e, t[i], p[i]);
                s[i] = self.assemble(Property::Entropy, &e, t[i], p[i]);
                d[i] = self.assemble(Property::Density, &e, t[i], p[i]);
            }
        }
        Ok((h, s, d))
    }

    /// Temperature in K from enthalpy and pressure.
    ///
    /// Regions 1 and 2 use the explicit backward equations, region 3 the
    /// two-dimensional Newton inversion seeded from the region boundaries.
    /// Below the region-3 pressure threshold a two-phase (h, p) input
    /// resolves to the saturation temperature.
    pub fn t_ph(&self, enthalpy: f64, pressure: f64) -> SteamResult<f64> {
        self.backward_dispatch(enthalpy, pressure, SaturationProperty::Enthalpy)
    }

    /// Temperature in K from entropy and pressure.
    pub fn t_ps(&self, entropy: f64, pressure: f64) -> SteamResult<f64> {
        self.backward_dispatch(entropy, pressure, SaturationProperty::Entropy)
    }

    fn resolve_saturation(&self, spec: Option<TpSpec<f64>>) -> SteamResult<(f64, f64)> {
        match spec {
            None => {
                let p = self.config.default_pressure;
                Ok((saturation_temperature(&self.parameters, p)?, p))
            }
            Some(TpSpec::Temperature(t)) => Ok((t, saturation_pressure(&self.parameters, t)?)),
            Some(TpSpec::Pressure(p)) => Ok((saturation_temperature(&self.parameters, p)?, p)),
        }
    }

    fn warn_accuracy(&self, temperature: f64) {
        if temperature > T_ACCURACY_LIMIT {
            accuracy_warning();
        }
    }

    fn saturation_state(
        &self,
        spec: Option<TpSpec<f64>>,
        property: SaturationProperty,
    ) -> SteamResult<SaturationState<f64>> {
        let (temperature, pressure) = self.resolve_saturation(spec)?;
        self.warn_accuracy(temperature);
        let (liquid, vapor) = saturation_pair(&self.parameters, temperature, pressure, property)?;
        Ok(SaturationState {
            temperature,
            pressure,
            liquid,
            vapor,
        })
    }

    fn saturation_state_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        property: SaturationProperty,
    ) -> SteamResult<SaturationState<Array1<f64>>> {
        let (temperature, pressure) = match spec {
            TpSpec::Temperature(t) => (t.clone(), self.ps_array(t)?),
            TpSpec::Pressure(p) => (self.ts_array(p)?, p.clone()),
        };
        if temperature.iter().any(|&t| t > T_ACCURACY_LIMIT) {
            accuracy_warning();
        }
        let mut liquid = Array1::zeros(temperature.len());
        let mut vapor = Array1::zeros(temperature.len());
        for i in 0..temperature.len() {
            let (l, v) = saturation_pair(&self.parameters, temperature[i], pressure[i], property)?;
            liquid[i] = l;
            vapor[i] = v;
        }
        Ok(SaturationState {
            temperature,
            pressure,
            liquid,
            vapor,
        })
    }

    fn quality_property(
        &self,
        spec: Option<TpSpec<f64>>,
        quality: f64,
        property: SaturationProperty,
    ) -> SteamResult<f64> {
        check_quality(quality)?;
        let sat = self.saturation_state(spec, property)?;
        Ok(sat.liquid + (sat.vapor - sat.liquid) * quality)
    }

    fn quality_property_array(
        &self,
        spec: TpSpec<&Array1<f64>>,
        quality: &Array1<f64>,
        property: SaturationProperty,
    ) -> SteamResult<Array1<f64>> {
        for &x in quality.iter() {
            check_quality(x)?;
        }
        let sat = self.saturation_state_array(spec, property)?;
        let (liquid, quality) = broadcast_pair(&sat.liquid, quality)?;
        let (vapor, _) = broadcast_pair(&sat.vapor, &quality)?;
        Ok(&liquid + &((&vapor - &liquid) * &quality))
    }

    fn eval_region(
        &self,
        region: Region,
        temperature: f64,
        pressure: f64,
        order: usize,
    ) -> SteamResult<RegionEval> {
        Ok(match region {
            Region::R1 => {
                RegionEval::Gibbs(gibbs_region1(&self.parameters, temperature, pressure, order)?)
            }
            Region::R2 => {
                RegionEval::Gibbs(gibbs_region2(&self.parameters, temperature, pressure, order)?)
            }
            Region::R5 => {
                RegionEval::Gibbs(gibbs_region5(&self.parameters, temperature, pressure, order)?)
            }
            Region::R3 => RegionEval::Helmholtz(crate::equation_of_state::density_region3(
                &self.parameters,
                temperature,
                pressure,
                SolverOptions::default(),
            )?),
        })
    }

    /// Assemble a property from the scaled derivatives of the fundamental
    /// equation.
    fn assemble(&self, property: Property, eval: &RegionEval, t: f64, p: f64) -> f64 {
        let r = self.parameters.r;
        match eval {
            RegionEval::Gibbs(e) => match property {
                Property::Enthalpy => r * t * e.tau * e.gt,
                Property::Entropy => r * (e.tau * e.gt - e.g),
                Property::Density => p * 100.0 / (r * t * e.pi * e.gp),
                Property::InternalEnergy => r * t * (e.tau * e.gt - e.pi * e.gp),
                Property::IsobaricHeatCapacity => -r * e.tau * e.tau * e.gtt,
                Property::IsochoricHeatCapacity => {
                    // valid in every Gibbs region: the ln(pi) part of g in
                    // regions 2 and 5 is absorbed by the full derivatives
                    let a = e.gp - e.tau * e.gpt;
                    r * (a * a / e.gpp - e.tau * e.tau * e.gtt)
                }
            },
            RegionEval::Helmholtz(e) => match property {
                Property::Enthalpy => r * t * (e.delta * e.fd + e.tau * e.ft),
                Property::Entropy => r * (e.tau * e.ft - e.f),
                Property::Density => self.parameters.dc * e.delta,
                Property::InternalEnergy => r * t * e.tau * e.ft,
                Property::IsobaricHeatCapacity => {
                    let a = e.delta * e.fd - e.delta * e.tau * e.fdt;
                    let b = 2.0 * e.delta * e.fd + e.delta * e.delta * e.fdd;
                    r * (-e.tau * e.tau * e.ftt + a * a / b)
                }
                Property::IsochoricHeatCapacity => -r * e.tau * e.tau * e.ftt,
            },
        }
    }

    fn property(&self, property: Property, temperature: f64, pressure: f64) -> SteamResult<f64> {
        let region = region::classify(&self.parameters, temperature, pressure)?;
        let e = self.eval_region(region, temperature, pressure, property.order())?;
        Ok(self.assemble(property, &e, temperature, pressure))
    }

    fn property_array(
        &self,
        property: Property,
        t: &Array1<f64>,
        p: &Array1<f64>,
    ) -> SteamResult<Array1<f64>> {
        let (t, p) = broadcast_pair(t, p)?;
        let regions = region::classify_array(&self.parameters, t.view(), p.view())?;
        let mut out = Array1::zeros(t.len());
        for &target in REGIONS.iter() {
            for i in batch(&regions, target) {
                let e = self.eval_region(target, t[i], p[i], property.order())?;
                out[i] = self.assemble(property, &e, t[i], p[i]);
            }
        }
        Ok(out)
    }

    fn backward_dispatch(
        &self,
        value: f64,
        pressure: f64,
        which: SaturationProperty,
    ) -> SteamResult<f64> {
        let parameters = &*self.parameters;
        if !(parameters.pt..=P_MAX).contains(&pressure) {
            return Err(SteamError::InvalidPressure(pressure));
        }
        // pressure of the 1/2/3 triple point on the saturation curve
        let p13 = saturation_pressure(parameters, T13)?;
        if pressure <= p13 {
            let ts = saturation_temperature(parameters, pressure)?;
            let (liquid, vapor) = saturation_pair(parameters, ts, pressure, which)?;
            return if value < liquid {
                self.backward_region1(value, pressure, which)
            } else if value > vapor {
                self.backward_region2(value, pressure, which)
            } else {
                Ok(ts)
            };
        }
        // above p13 the backward target can fall into region 3; bracket it
        // with the boundary values at 623.15 K and on the 2/3 line
        let t23 = region::b23_temperature(parameters, pressure);
        let e1 = gibbs_region1(parameters, T13, pressure, 1)?;
        let e2 = gibbs_region2(parameters, t23, pressure, 1)?;
        let r = parameters.r;
        let value_of = |e: &GibbsEval, t: f64| match which {
            SaturationProperty::Enthalpy => r * t * e.tau * e.gt,
            SaturationProperty::Entropy => r * (e.tau * e.gt - e.g),
            _ => unreachable!(),
        };
        let w1 = value_of(&e1, T13);
        let w2 = value_of(&e2, t23);
        if value < w1 {
            self.backward_region1(value, pressure, which)
        } else if value > w2 {
            self.backward_region2(value, pressure, which)
        } else {
            // region 3: seed the Newton inversion by interpolating the
            // boundary states
            let d1 = pressure * 100.0 / (r * T13 * e1.pi * e1.gp);
            let d2 = pressure * 100.0 / (r * t23 * e2.pi * e2.gp);
            let fraction = ((value - w1) / (w2 - w1)).max(0.05).min(0.95);
            let t_init = T13 + fraction * (t23 - T13);
            let d_init = d1 + fraction * (d2 - d1);
            let (t, _) = match which {
                SaturationProperty::Enthalpy => crate::equation_of_state::temperature_ph_region3(
                    parameters,
                    value,
                    pressure,
                    t_init,
                    d_init,
                    SolverOptions::default(),
                )?,
                SaturationProperty::Entropy => crate::equation_of_state::temperature_ps_region3(
                    parameters,
                    value,
                    pressure,
                    t_init,
                    d_init,
                    SolverOptions::default(),
                )?,
                _ => unreachable!(),
            };
            Ok(t)
        }
    }

    fn backward_region1(
        &self,
        value: f64,
        pressure: f64,
        which: SaturationProperty,
    ) -> SteamResult<f64> {
        match which {
            SaturationProperty::Enthalpy => {
                backward::temperature_ph_region1(&self.parameters, value, pressure)
            }
            SaturationProperty::Entropy => {
                backward::temperature_ps_region1(&self.parameters, value, pressure)
            }
            _ => unreachable!(),
        }
    }

    fn backward_region2(
        &self,
        value: f64,
        pressure: f64,
        which: SaturationProperty,
    ) -> SteamResult<f64> {
        match which {
            SaturationProperty::Enthalpy => {
                backward::temperature_ph_region2(&self.parameters, value, pressure)
            }
            SaturationProperty::Entropy => {
                backward::temperature_ps_region2(&self.parameters, value, pressure)
            }
            _ => unreachable!(),
        }
    }
}

fn accuracy_warning() {
    eprintln!("Warning: accuracy of saturation properties above 623.15 K is reduced.");
}

fn check_quality(quality: f64) -> SteamResult<()> {
    if (0.0..=1.0).contains(&quality) {
        Ok(())
    } else {
        Err(SteamError::InvalidQuality(quality))
    }
}

/// Indices of the elements belonging to one region's batch.
fn batch(regions: &Array1<Region>, target: Region) -> Vec<usize> {
    regions
        .iter()
        .enumerate()
        .filter(|(_, &r)| r == target)
        .map(|(i, _)| i)
        .collect()
}

/// Broadcast two rank-1 arrays against each other; length 1 stretches.
fn broadcast_pair(a: &Array1<f64>, b: &Array1<f64>) -> SteamResult<(Array1<f64>, Array1<f64>)> {
    match (a.len(), b.len()) {
        (n, m) if n == m => Ok((a.clone(), b.clone())),
        (1, m) => Ok((Array1::from_elem(m, a[0]), b.clone())),
        (n, 1) => Ok((a.clone(), Array1::from_elem(n, b[0]))),
        (n, m) => Err(SteamError::BroadcastMismatch(n, m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn facade_agrees_with_region_evaluators() -> SteamResult<()> {
        // region 1 state assembled by hand from the Gibbs derivatives
        let steam = Steam::default();
        let parameters = steam.parameters();
        let e = gibbs_region1(parameters, 300.0, 30.0, 1)?;
        let h = parameters.r * 300.0 * e.tau * e.gt;
        assert_relative_eq!(steam.h(300.0, 30.0)?, h, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn single_phase_verification_states() -> SteamResult<()> {
        let steam = Steam::default();
        assert_relative_eq!(steam.h(300.0, 30.0)?, 115.331273, max_relative = 1e-8);
        assert_relative_eq!(steam.s(300.0, 30.0)?, 0.392294792, max_relative = 1e-8);
        assert_relative_eq!(steam.d(300.0, 30.0)?, 1.0 / 1.00215168e-3, max_relative = 1e-8);
        assert_relative_eq!(steam.h(700.0, 300.0)?, 2631.49474, max_relative = 1e-8);
        assert_relative_eq!(steam.h(1500.0, 5.0)?, 5219.76855, max_relative = 1e-8);
        // region 3 runs through the density iteration
        assert_relative_eq!(steam.d(650.0, 255.837018)?, 500.0, max_relative = 1e-5);
        assert_relative_eq!(steam.h(650.0, 255.837018)?, 1863.43019, max_relative = 1e-5);
        Ok(())
    }

    #[test]
    fn heat_capacities_are_ordered() -> SteamResult<()> {
        let steam = Steam::default();
        for &(t, p) in [(300.0, 30.0), (700.0, 300.0), (650.0, 255.837018), (1500.0, 5.0)].iter() {
            let cp = steam.cp(t, p)?;
            let cv = steam.cv(t, p)?;
            assert!(cv > 0.0);
            assert!(cp > cv, "cp = {} <= cv = {} at ({}, {})", cp, cv, t, p);
        }
        Ok(())
    }

    #[test]
    fn hsd_agrees_with_individual_properties() -> SteamResult<()> {
        let steam = Steam::default();
        for &(t, p) in [(300.0, 30.0), (700.0, 300.0), (650.0, 300.0), (1500.0, 5.0)].iter() {
            let (h, s, d) = steam.hsd(t, p)?;
            assert_relative_eq!(h, steam.h(t, p)?, max_relative = 1e-10);
            assert_relative_eq!(s, steam.s(t, p)?, max_relative = 1e-10);
            assert_relative_eq!(d, steam.d(t, p)?, max_relative = 1e-10);
        }
        Ok(())
    }

    #[test]
    fn array_dispatch_matches_scalar_calls() -> SteamResult<()> {
        // one batch per region in a single call
        let steam = Steam::default();
        let t = arr1(&[300.0, 700.0, 650.0, 1500.0]);
        let p = arr1(&[30.0, 300.0, 300.0, 5.0]);
        let h = steam.h_array(&t, &p)?;
        for i in 0..t.len() {
            assert_relative_eq!(h[i], steam.h(t[i], p[i])?, max_relative = 1e-12);
        }
        let (hb, sb, db) = steam.hsd_array(&t, &p)?;
        for i in 0..t.len() {
            assert_relative_eq!(hb[i], steam.h(t[i], p[i])?, max_relative = 1e-12);
            assert_relative_eq!(sb[i], steam.s(t[i], p[i])?, max_relative = 1e-12);
            assert_relative_eq!(db[i], steam.d(t[i], p[i])?, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn scalars_broadcast_against_arrays() -> SteamResult<()> {
        let steam = Steam::default();
        let t = arr1(&[300.0, 350.0, 400.0]);
        let p = arr1(&[50.0]);
        let h = steam.h_array(&t, &p)?;
        assert_eq!(h.len(), 3);
        assert_relative_eq!(h[2], steam.h(400.0, 50.0)?, max_relative = 1e-12);
        assert!(matches!(
            steam.h_array(&arr1(&[300.0, 350.0]), &arr1(&[1.0, 2.0, 3.0])),
            Err(SteamError::BroadcastMismatch(2, 3))
        ));
        Ok(())
    }

    #[test]
    fn two_phase_interpolation_is_linear() -> SteamResult<()> {
        let steam = Steam::default();
        let sat = steam.hs(Some(TpSpec::Pressure(10.0)))?;
        for &x in [0.0, 0.25, 0.5, 1.0].iter() {
            let h = steam.h_quality(Some(TpSpec::Pressure(10.0)), x)?;
            assert_relative_eq!(
                h,
                sat.liquid + (sat.vapor - sat.liquid) * x,
                max_relative = 1e-12
            );
        }
        Ok(())
    }

    #[test]
    fn quality_bounds_are_enforced() {
        let steam = Steam::default();
        assert!(matches!(
            steam.h_quality(Some(TpSpec::Pressure(10.0)), 1.2),
            Err(SteamError::InvalidQuality(_))
        ));
        assert!(matches!(
            steam.h_quality(Some(TpSpec::Pressure(10.0)), -0.1),
            Err(SteamError::InvalidQuality(_))
        ));
    }

    #[test]
    fn saturation_state_carries_both_coordinates() -> SteamResult<()> {
        let steam = Steam::default();
        let sat = steam.hs(Some(TpSpec::Temperature(453.035632)))?;
        assert_relative_eq!(sat.pressure, 10.0, max_relative = 1e-6);
        let sat = steam.hs(Some(TpSpec::Pressure(10.0)))?;
        assert_relative_eq!(sat.temperature, 453.035632, max_relative = 1e-8);
        // an omitted coordinate falls back to the configured default
        let sat = steam.hs(None)?;
        assert_relative_eq!(sat.pressure, 1.01325, max_relative = 1e-12);
        assert_relative_eq!(sat.temperature, steam.ts_default()?, max_relative = 1e-12);
        assert_relative_eq!(steam.ps_default()?, steam.ps(300.0)?, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn quality_arrays_broadcast() -> SteamResult<()> {
        let steam = Steam::default();
        let p = arr1(&[10.0]);
        let x = arr1(&[0.0, 0.5, 1.0]);
        let h = steam.h_quality_array(TpSpec::Pressure(&p), &x)?;
        assert_eq!(h.len(), 3);
        assert_relative_eq!(
            h[1],
            steam.h_quality(Some(TpSpec::Pressure(10.0)), 0.5)?,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn backward_temperatures_round_trip() -> SteamResult<()> {
        let steam = Steam::default();
        // regions 1 and 2 through the explicit backward equations
        for &(t, p) in [
            (300.0, 30.0),
            (500.0, 800.0),
            (450.0, 5.0),
            (700.0, 300.0),
            (700.0, 50.0),
            (900.0, 800.0),
        ]
        .iter()
        {
            let h = steam.h(t, p)?;
            assert!((steam.t_ph(h, p)? - t).abs() < 0.03, "t_ph at ({}, {})", t, p);
            let s = steam.s(t, p)?;
            assert!((steam.t_ps(s, p)? - t).abs() < 0.03, "t_ps at ({}, {})", t, p);
        }
        // region 3 through the Newton inversion
        for &(t, p) in [(650.0, 300.0), (700.0, 400.0), (750.0, 700.0)].iter() {
            let h = steam.h(t, p)?;
            assert!((steam.t_ph(h, p)? - t).abs() < 0.05, "t_ph at ({}, {})", t, p);
            let s = steam.s(t, p)?;
            assert!((steam.t_ps(s, p)? - t).abs() < 0.05, "t_ps at ({}, {})", t, p);
        }
        Ok(())
    }

    #[test]
    fn two_phase_enthalpy_resolves_to_saturation_temperature() -> SteamResult<()> {
        let steam = Steam::default();
        let sat = steam.hs(Some(TpSpec::Pressure(10.0)))?;
        let h = 0.5 * (sat.liquid + sat.vapor);
        assert_relative_eq!(steam.t_ph(h, 10.0)?, sat.temperature, max_relative = 1e-8);
        Ok(())
    }

    #[test]
    fn constants_come_from_the_bundle() {
        let steam = Steam::default();
        assert_eq!(steam.critical(), (647.096, 220.64));
        assert_eq!(steam.triple(), (273.16, 0.00611657));
        assert_eq!(steam.mw(), 18.015268);
    }
}
