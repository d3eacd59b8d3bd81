//! The coefficient bundle consumed by the IF-97 engine.
//!
//! The bundle holds the physical constants of water together with the sparse
//! polynomial term lists of every regional equation. It is created once, is
//! never mutated afterwards, and can be shared freely between threads. The
//! published IAPWS release values are built in via [`If97Parameters::new`];
//! [`If97Parameters::from_json`] loads a bundle provided by a host framework
//! instead.
use crate::polynomial::PolyTerm;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

mod water;

/// Error type for incomplete or inconsistent coefficient bundles.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Term list `{0}` is not sorted ascending by (m, n).")]
    UnsortedTerms(&'static str),
    #[error("Term list `{0}` contains the exponent {1}, outside the permitted range.")]
    ExponentOutOfRange(&'static str, i32),
}

/// The IF-97 coefficient bundle.
///
/// Field names follow the keys of the tabulated data: `r1`, `r2o`/`r2r`,
/// `r3`/`r3ln`, `r5o`/`r5r` are the term lists of the regional fundamental
/// equations, `r4` the saturation quartic, `b23` the region-2/3 boundary
/// (pressure in bar), and `th*`/`ts*` the backward-equation term lists.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct If97Parameters {
    /// Specific gas constant in kJ/kg/K.
    #[serde(rename = "R")]
    pub r: f64,
    /// Critical temperature in K.
    #[serde(rename = "Tc")]
    pub tc: f64,
    /// Critical pressure in bar.
    pub pc: f64,
    /// Critical density in kg/m³.
    pub dc: f64,
    /// Triple-point temperature in K.
    #[serde(rename = "Tt")]
    pub tt: f64,
    /// Triple-point pressure in bar.
    pub pt: f64,
    /// Molar mass in kg/kmol.
    pub mw: f64,
    pub r1: Vec<PolyTerm>,
    pub r2o: Vec<PolyTerm>,
    pub r2r: Vec<PolyTerm>,
    pub r3: Vec<PolyTerm>,
    /// Coefficient of the ln(δ) term of the region-3 Helmholtz equation.
    pub r3ln: f64,
    pub r4: [f64; 10],
    pub b23: [f64; 5],
    pub r5o: Vec<PolyTerm>,
    pub r5r: Vec<PolyTerm>,
    pub th1: Vec<PolyTerm>,
    pub ts1: Vec<PolyTerm>,
    pub th2a: Vec<PolyTerm>,
    pub th2b: Vec<PolyTerm>,
    pub th2c: Vec<PolyTerm>,
    pub ts2a: Vec<PolyTerm>,
    pub ts2b: Vec<PolyTerm>,
    pub ts2c: Vec<PolyTerm>,
}

impl If97Parameters {
    /// Create the bundle from the built-in IAPWS release values.
    pub fn new() -> Self {
        water::water_parameters()
    }

    /// Load a bundle from a json file and validate its term lists.
    pub fn from_json<P: AsRef<Path>>(file: P) -> Result<Self, ParameterError> {
        let reader = BufReader::new(File::open(file)?);
        let parameters: Self = serde_json::from_reader(reader)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Check the ordering invariant and the exponent bound of every term list.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let lists: [(&'static str, &[PolyTerm]); 14] = [
            ("r1", &self.r1),
            ("r2o", &self.r2o),
            ("r2r", &self.r2r),
            ("r3", &self.r3),
            ("r5o", &self.r5o),
            ("r5r", &self.r5r),
            ("th1", &self.th1),
            ("ts1", &self.ts1),
            ("th2a", &self.th2a),
            ("th2b", &self.th2b),
            ("th2c", &self.th2c),
            ("ts2a", &self.ts2a),
            ("ts2b", &self.ts2b),
            ("ts2c", &self.ts2c),
        ];
        for &(key, terms) in lists.iter() {
            for term in terms.iter() {
                if term.m.abs() > 100 {
                    return Err(ParameterError::ExponentOutOfRange(key, term.m));
                }
                if term.n.abs() > 100 {
                    return Err(ParameterError::ExponentOutOfRange(key, term.n));
                }
            }
            for pair in terms.windows(2) {
                if (pair[1].m, pair[1].n) <= (pair[0].m, pair[0].n) {
                    return Err(ParameterError::UnsortedTerms(key));
                }
            }
        }
        Ok(())
    }
}

impl Default for If97Parameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundle_is_valid() {
        let p = If97Parameters::new();
        assert!(p.validate().is_ok());
        assert_eq!(p.r1.len(), 34);
        assert_eq!(p.r2o.len(), 9);
        assert_eq!(p.r2r.len(), 43);
        assert_eq!(p.r3.len(), 39);
        assert_eq!(p.r5o.len(), 6);
        assert_eq!(p.r5r.len(), 6);
    }

    #[test]
    fn json_round_trip() {
        let p = If97Parameters::new();
        let json = serde_json::to_string(&p).expect("Unable to serialize bundle.");
        let q: If97Parameters = serde_json::from_str(&json).expect("Unable to parse json.");
        assert_eq!(p.r, q.r);
        assert_eq!(p.r1, q.r1);
        assert_eq!(p.r4, q.r4);
        assert_eq!(p.ts2c, q.ts2c);
    }

    #[test]
    fn unsorted_terms_are_rejected() {
        let mut p = If97Parameters::new();
        p.r1.swap(0, 1);
        assert!(matches!(p.validate(), Err(ParameterError::UnsortedTerms("r1"))));
    }

    #[test]
    fn oversized_exponents_are_rejected() {
        let mut p = If97Parameters::new();
        p.th1[0].n = 101;
        assert!(matches!(
            p.validate(),
            Err(ParameterError::ExponentOutOfRange("th1", 101))
        ));
    }
}
