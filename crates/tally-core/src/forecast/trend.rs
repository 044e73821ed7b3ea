//! Quadratic trend fitting over a bucketed monthly series

/// Pivot threshold below which the normal equations are treated as singular
const SINGULAR_EPS: f64 = 1e-9;

/// Coefficients of a fitted trend: amount = quadratic*x^2 + linear*x + intercept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub quadratic: f64,
    pub linear: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Fit by ordinary least squares over the expanded features {x, x^2}
    ///
    /// Fewer than three points leave the quadratic under-determined; rather
    /// than failing, the fit degrades to a line through the points, and then
    /// to their mean, so any non-empty series yields a usable model. Returns
    /// None only for an empty input.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        if let Some(model) = Self::fit_quadratic(points) {
            return Some(model);
        }

        if let Some((linear, intercept)) = Self::fit_linear(points) {
            return Some(Self {
                quadratic: 0.0,
                linear,
                intercept,
            });
        }

        let mean = points.iter().map(|&(_, y)| y).sum::<f64>() / points.len() as f64;
        Some(Self {
            quadratic: 0.0,
            linear: 0.0,
            intercept: mean,
        })
    }

    /// Evaluate the fitted polynomial at x
    pub fn predict(&self, x: f64) -> f64 {
        self.quadratic * x * x + self.linear * x + self.intercept
    }

    /// Full quadratic fit via the 3x3 normal equations; None when singular
    fn fit_quadratic(points: &[(f64, f64)]) -> Option<Self> {
        let n = points.len() as f64;
        let (mut sx, mut sx2, mut sx3, mut sx4) = (0.0, 0.0, 0.0, 0.0);
        let (mut sy, mut sxy, mut sx2y) = (0.0, 0.0, 0.0);
        for &(x, y) in points {
            let x2 = x * x;
            sx += x;
            sx2 += x2;
            sx3 += x2 * x;
            sx4 += x2 * x2;
            sy += y;
            sxy += x * y;
            sx2y += x2 * y;
        }

        // X^T X | X^T y for rows [1, x, x^2]
        let mut system = [
            [n, sx, sx2, sy],
            [sx, sx2, sx3, sxy],
            [sx2, sx3, sx4, sx2y],
        ];
        let beta = solve_3x3(&mut system)?;

        Some(Self {
            intercept: beta[0],
            linear: beta[1],
            quadratic: beta[2],
        })
    }

    /// Straight-line least squares; None when all x coincide
    fn fit_linear(points: &[(f64, f64)]) -> Option<(f64, f64)> {
        let n = points.len() as f64;
        let (mut sx, mut sx2, mut sy, mut sxy) = (0.0, 0.0, 0.0, 0.0);
        for &(x, y) in points {
            sx += x;
            sx2 += x * x;
            sy += y;
            sxy += x * y;
        }

        let denom = n * sx2 - sx * sx;
        if denom.abs() < SINGULAR_EPS {
            return None;
        }

        let linear = (n * sxy - sx * sy) / denom;
        let intercept = (sy - linear * sx) / n;
        Some((linear, intercept))
    }
}

/// Gaussian elimination with partial pivoting on an augmented 3x4 system
///
/// Returns None when a pivot collapses, i.e. the system is singular.
fn solve_3x3(m: &mut [[f64; 4]; 3]) -> Option<[f64; 3]> {
    for col in 0..3 {
        let pivot_row = (col..3)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot_row][col].abs() < SINGULAR_EPS {
            return None;
        }
        m.swap(col, pivot_row);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut beta = [0.0; 3];
    for row in (0..3).rev() {
        let mut acc = m[row][3];
        for k in row + 1..3 {
            acc -= m[row][k] * beta[k];
        }
        beta[row] = acc / m[row][row];
    }
    Some(beta)
}
