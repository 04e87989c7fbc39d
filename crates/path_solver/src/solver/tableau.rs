//! Butcher tableaux for explicit methods.

/// Coefficients of an explicit Runge–Kutta method.
///
/// Row `i` of `a` holds the `i` coefficients multiplying the earlier stages,
/// so the first row is empty.
#[derive(Debug, PartialEq)]
pub struct ButcherTableau {
    /// Strictly lower-triangular stage coefficients, one row per stage.
    pub a: &'static [&'static [f64]],
    /// Solution weights.
    pub b: &'static [f64],
    /// Stage time fractions.
    pub c: &'static [f64],
}

impl ButcherTableau {
    /// Number of stages.
    #[inline]
    pub fn stages(&self) -> usize {
        self.c.len()
    }

    /// Checks the row-sum conditions `c_i = Σ_j a_ij` and `Σ_i b_i = 1`.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        if self.a.len() != self.stages() || self.b.len() != self.stages() {
            return false;
        }
        let rows_ok = self
            .a
            .iter()
            .zip(self.c)
            .enumerate()
            .all(|(i, (row, &c))| row.len() == i && (row.iter().sum::<f64>() - c).abs() < tolerance);
        rows_ok && (self.b.iter().sum::<f64>() - 1.0).abs() < tolerance
    }
}

pub(super) static EULER: ButcherTableau = ButcherTableau {
    a: &[&[]],
    b: &[1.0],
    c: &[0.0],
};

pub(super) static HEUN: ButcherTableau = ButcherTableau {
    a: &[&[], &[1.0]],
    b: &[0.5, 0.5],
    c: &[0.0, 1.0],
};

// The seventh (FSAL) stage only feeds the embedded error estimate, which
// constant stepping never uses.
pub(super) static DOPRI5: ButcherTableau = ButcherTableau {
    a: &[
        &[],
        &[1.0 / 5.0],
        &[3.0 / 40.0, 9.0 / 40.0],
        &[44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0],
        &[
            19372.0 / 6561.0,
            -25360.0 / 2187.0,
            64448.0 / 6561.0,
            -212.0 / 729.0,
        ],
        &[
            9017.0 / 3168.0,
            -355.0 / 33.0,
            46732.0 / 5247.0,
            49.0 / 176.0,
            -5103.0 / 18656.0,
        ],
    ],
    b: &[
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
    c: &[0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0],
};
