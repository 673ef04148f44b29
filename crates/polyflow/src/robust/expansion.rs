//! Floating-point expansion arithmetic.
//!
//! An expansion is a sum of doubles whose components are non-overlapping and
//! sorted by increasing magnitude; its value is exact. Every operation here is
//! error-free, so the sign of the largest component is the true sign.
//!
//! References
//! - J. R. Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast
//!   Robust Geometric Predicates" (1997).

/// 2^27 + 1, splits a double into two 26-bit halves.
const SPLITTER: f64 = 134_217_729.0;

/// `a + b = x + y` exactly, given `|a| >= |b|`.
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    (x, b - b_virtual)
}

/// `a + b = x + y` exactly.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_round = b - b_virtual;
    let a_round = a - a_virtual;
    (x, a_round + b_round)
}

/// `a - b = x + y` exactly.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    let b_virtual = a - x;
    let a_virtual = x + b_virtual;
    let b_round = b_virtual - b;
    let a_round = a - a_virtual;
    (x, a_round + b_round)
}

/// `a = hi + lo` with both halves representable in 26 bits.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    let c = SPLITTER * a;
    let a_big = c - a;
    let hi = c - a_big;
    (hi, a - hi)
}

/// `a * b = x + y` exactly.
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err1 = x - a_hi * b_hi;
    let err2 = err1 - a_lo * b_hi;
    let err3 = err2 - a_hi * b_lo;
    (x, a_lo * b_lo - err3)
}

/// Exact multi-component value. Never empty; zero is `[0.0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion {
    comps: Vec<f64>,
}

impl Expansion {
    pub fn from_f64(a: f64) -> Self {
        Self { comps: vec![a] }
    }

    /// Exact `a - b`.
    pub fn from_diff(a: f64, b: f64) -> Self {
        let (x, y) = two_diff(a, b);
        Self::from_pair(x, y)
    }

    /// Exact `a * b`.
    pub fn from_product(a: f64, b: f64) -> Self {
        let (x, y) = two_product(a, b);
        Self::from_pair(x, y)
    }

    fn from_pair(hi: f64, lo: f64) -> Self {
        let mut comps = Vec::with_capacity(2);
        if lo != 0.0 {
            comps.push(lo);
        }
        if hi != 0.0 || comps.is_empty() {
            comps.push(hi);
        }
        Self { comps }
    }

    fn from_comps(mut comps: Vec<f64>) -> Self {
        if comps.is_empty() {
            comps.push(0.0);
        }
        Self { comps }
    }

    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.comps
    }

    /// Add one double (grow-expansion with zero elimination).
    pub fn grow(&self, b: f64) -> Expansion {
        let mut out = Vec::with_capacity(self.comps.len() + 1);
        let mut q = b;
        for &e in &self.comps {
            let (sum, err) = two_sum(q, e);
            q = sum;
            if err != 0.0 {
                out.push(err);
            }
        }
        if q != 0.0 || out.is_empty() {
            out.push(q);
        }
        Self::from_comps(out)
    }

    /// Exact sum of two expansions.
    pub fn sum(&self, other: &Expansion) -> Expansion {
        other
            .comps
            .iter()
            .fold(self.clone(), |acc, &f| if f == 0.0 { acc } else { acc.grow(f) })
    }

    /// Exact difference `self - other`.
    pub fn diff(&self, other: &Expansion) -> Expansion {
        self.sum(&other.neg())
    }

    pub fn neg(&self) -> Expansion {
        Self {
            comps: self.comps.iter().map(|c| -c).collect(),
        }
    }

    /// Exact product with one double (scale-expansion with zero elimination).
    pub fn scale(&self, b: f64) -> Expansion {
        let mut out = Vec::with_capacity(2 * self.comps.len());
        let (mut q, err) = two_product(self.comps[0], b);
        if err != 0.0 {
            out.push(err);
        }
        for &e in &self.comps[1..] {
            let (p_hi, p_lo) = two_product(e, b);
            let (sum, err) = two_sum(q, p_lo);
            if err != 0.0 {
                out.push(err);
            }
            let (next, err) = fast_two_sum(p_hi, sum);
            if err != 0.0 {
                out.push(err);
            }
            q = next;
        }
        if q != 0.0 || out.is_empty() {
            out.push(q);
        }
        Self::from_comps(out)
    }

    /// Exact product of two expansions.
    pub fn product(&self, other: &Expansion) -> Expansion {
        other
            .comps
            .iter()
            .fold(Expansion::from_f64(0.0), |acc, &f| {
                if f == 0.0 {
                    acc
                } else {
                    acc.sum(&self.scale(f))
                }
            })
    }

    /// Sign of the exact value: -1, 0 or 1.
    #[inline]
    pub fn sign(&self) -> i32 {
        // Zero elimination leaves the largest component last.
        let top = self.comps[self.comps.len() - 1];
        if top > 0.0 {
            1
        } else if top < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Rounded value of the expansion.
    pub fn estimate(&self) -> f64 {
        self.comps.iter().sum()
    }
}
