//! Sparse bivariate polynomials and their evaluation kernel.
//!
//! The fundamental equations of IF-97 are sums of a few dozen terms
//! c·x^m·y^n with integer exponents of either sign. [`peval`] evaluates such
//! a sum together with its first and second partial derivatives in a single
//! pass over the term list, using a Horner recursion on both axes with
//! zero-coefficient steps inserted for absent exponents.
use crate::errors::{SteamError, SteamResult};
use serde::{Deserialize, Serialize};

/// Largest exponent magnitude accepted while walking a term list. A term
/// list that violates the ordering invariant would otherwise make the walk
/// run away; the bound turns corrupted data into a reported error.
const LARGE_EXPONENT: i32 = 100;

/// A single term c·x^m·y^n of a sparse bivariate polynomial.
///
/// Term lists are kept sorted ascending by (m, n). The evaluation kernel
/// walks them from the tail, so it sees exponents in descending order, first
/// by m and then by n within equal m.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolyTerm {
    /// Exponent of the first variable.
    pub m: i32,
    /// Exponent of the second variable.
    pub n: i32,
    /// Coefficient.
    pub c: f64,
}

impl PolyTerm {
    pub const fn new(m: i32, n: i32, c: f64) -> Self {
        Self { m, n, c }
    }
}

/// Value and partial derivatives of a polynomial at a point.
///
/// Derivatives above the requested order are left at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyEval {
    pub p: f64,
    pub px: f64,
    pub py: f64,
    pub pxx: f64,
    pub pxy: f64,
    pub pyy: f64,
}

/// Powers x^m, m·x^(m-1) and m·(m-1)·x^(m-2) for the closing multiplication
/// of a Horner group. The m == 1 case avoids 0^(-1) at x = 0.
fn closing_powers(x: f64, m: i32) -> (f64, f64, f64) {
    if m == 1 {
        (x, 1.0, 0.0)
    } else {
        let ddxm = x.powi(m - 2);
        let dxm = ddxm * x;
        let xm = dxm * x;
        (xm, dxm * m as f64, ddxm * ((m - 1) * m) as f64)
    }
}

/// Evaluate a sparse polynomial and its partial derivatives up to `order`.
///
/// The term list must be sorted ascending by (m, n); exponents beyond the
/// sanity bound are reported as [`SteamError::CorruptedCoefficients`]. The
/// evaluation itself is allocation-free.
pub fn peval(x: f64, y: f64, terms: &[PolyTerm], order: usize) -> SteamResult<PolyEval> {
    let mut e = PolyEval::default();
    if terms.is_empty() {
        return Ok(e);
    }

    // walk from the highest-order term downwards
    let mut index = terms.len() as isize - 1;
    let mut m = terms[index as usize].m;
    if m > LARGE_EXPONENT {
        return Err(SteamError::CorruptedCoefficients(m));
    }
    while index >= 0 {
        // a sub-polynomial q(y) is accumulated for every x-exponent m
        let mut q = 0.0;
        let mut dq = 0.0;
        let mut ddq = 0.0;
        if terms[index as usize].m == m {
            let mut n = terms[index as usize].n;
            if n > LARGE_EXPONENT {
                return Err(SteamError::CorruptedCoefficients(n));
            }
            // Horner steps in y while the x-exponent is unchanged; a missing
            // y-exponent contributes a zero coefficient
            while index >= 0 && terms[index as usize].m == m {
                if order > 1 {
                    ddq = ddq * y + 2.0 * dq;
                }
                if order > 0 {
                    dq = dq * y + q;
                }
                if terms[index as usize].n == n {
                    q = q * y + terms[index as usize].c;
                    index -= 1;
                } else {
                    q *= y;
                }
                n -= 1;
                if n < -LARGE_EXPONENT {
                    return Err(SteamError::CorruptedCoefficients(n));
                }
            }
            // close the group with the trailing power of y
            n += 1;
            if n != 0 {
                let (yn, dyn_, ddyn) = closing_powers(y, n);
                if order > 1 {
                    ddq = ddq * yn + 2.0 * dq * dyn_ + q * ddyn;
                }
                if order > 0 {
                    dq = q * dyn_ + dq * yn;
                }
                q *= yn;
            }
            // fold the group into the running polynomial
            if order > 1 {
                e.pyy = e.pyy * x + ddq;
                e.pxy = e.pxy * x + e.py;
                e.pxx = e.pxx * x + 2.0 * e.px;
            }
            if order > 0 {
                e.py = e.py * x + dq;
                e.px = e.px * x + e.p;
            }
            e.p = e.p * x + q;
        } else {
            // no terms with this x-exponent
            if order > 1 {
                e.pyy *= x;
                e.pxy = e.pxy * x + e.py;
                e.pxx = e.pxx * x + 2.0 * e.px;
            }
            if order > 0 {
                e.py *= x;
                e.px = e.px * x + e.p;
            }
            e.p *= x;
        }
        m -= 1;
        if m < -LARGE_EXPONENT {
            return Err(SteamError::CorruptedCoefficients(m));
        }
    }
    // close out with the trailing power of x
    m += 1;
    if m != 0 {
        let (xm, dxm, ddxm) = closing_powers(x, m);
        if order > 1 {
            e.pxx = e.pxx * xm + 2.0 * e.px * dxm + e.p * ddxm;
            e.pxy = e.pxy * xm + e.py * dxm;
            e.pyy *= xm;
        }
        if order > 0 {
            e.px = e.px * xm + e.p * dxm;
            e.py *= xm;
        }
        e.p *= xm;
    }
    Ok(e)
}
