//! Simulated path ensembles.
//!
//! # Memory Layout
//!
//! Values are stored time-major: `values[t * n_paths + j]` is path `j` at
//! time point `t`, for `t` in `0..=n_steps`. A whole time slice (for example
//! the terminal row the pricer needs) is therefore one contiguous slice.

/// What the ensemble values represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathKind {
    /// Asset prices; row 0 is S0.
    Price,
    /// Cumulative log-returns ln(S_t / S0); row 0 is 0.
    LogReturn,
}

/// Equal-width histogram over a set of values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` entries in increasing order.
    pub edges: Vec<f64>,
    /// Number of values falling in each bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Builds a histogram with `bins` equal-width bins spanning the data.
    ///
    /// The last bin is closed on the right so the maximum is counted. When
    /// every value is identical the single span is widened by ±0.5 so that
    /// edges stay strictly increasing.
    ///
    /// Returns `None` for empty data or `bins == 0`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::Histogram;
    ///
    /// let h = Histogram::from_values(&[1.0, 2.0, 2.5, 4.0], 3).unwrap();
    /// assert_eq!(h.counts, vec![1, 2, 1]);
    /// assert_eq!(h.edges, vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Bin centres, one per count.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Total number of values counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A simulated ensemble of `n_paths` trajectories over `n_steps + 1` time points.
///
/// Produced once by the simulator and read-only afterwards. Serialises for
/// output but cannot be deserialised, so every instance comes from a
/// simulator with a consistent grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathEnsemble {
    kind: PathKind,
    n_steps: usize,
    n_paths: usize,
    dt: f64,
    values: Vec<f64>,
}

impl PathEnsemble {
    /// Wraps a time-major value grid.
    ///
    /// `values.len()` must equal `(n_steps + 1) * n_paths`.
    pub(crate) fn from_grid(
        kind: PathKind,
        n_steps: usize,
        n_paths: usize,
        dt: f64,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), (n_steps + 1) * n_paths);
        Self {
            kind,
            n_steps,
            n_paths,
            dt,
            values,
        }
    }

    /// What the values represent.
    #[inline]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Number of time steps (M).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of time points (M + 1).
    #[inline]
    pub fn n_time_points(&self) -> usize {
        self.n_steps + 1
    }

    /// Number of paths (N).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Shape as `(time points, paths)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_time_points(), self.n_paths)
    }

    /// Time step shared by all paths.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Value of path `path` at time point `t`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn value(&self, t: usize, path: usize) -> f64 {
        assert!(t <= self.n_steps && path < self.n_paths, "index out of range");
        self.values[t * self.n_paths + path]
    }

    /// All path values at time point `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t > n_steps`.
    #[inline]
    pub fn row(&self, t: usize) -> &[f64] {
        let start = t * self.n_paths;
        &self.values[start..start + self.n_paths]
    }

    /// Iterator over the time rows, from t = 0 to maturity.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.n_paths)
    }

    /// Initial values (row 0).
    #[inline]
    pub fn initial_values(&self) -> &[f64] {
        self.row(0)
    }

    /// Terminal values (row M).
    #[inline]
    pub fn terminal_values(&self) -> &[f64] {
        self.row(self.n_steps)
    }

    /// Iterator over one trajectory.
    ///
    /// # Panics
    ///
    /// Panics if `path >= n_paths`.
    pub fn path(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(path < self.n_paths, "path index out of range");
        self.values
            .iter()
            .skip(path)
            .step_by(self.n_paths)
            .copied()
    }

    /// The raw time-major grid.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the ensemble and returns the time-major grid.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Time grid `0, dt, 2dt, …, T`.
    pub fn times(&self) -> Vec<f64> {
        (0..=self.n_steps).map(|t| t as f64 * self.dt).collect()
    }

    /// Cross-sectional mean at every time point.
    pub fn mean_path(&self) -> Vec<f64> {
        let n = self.n_paths as f64;
        self.rows().map(|row| row.iter().sum::<f64>() / n).collect()
    }

    /// Histogram of the terminal values.
    ///
    /// Returns `None` when `bins == 0`.
    pub fn terminal_histogram(&self, bins: usize) -> Option<Histogram> {
        Histogram::from_values(self.terminal_values(), bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_ensemble() -> PathEnsemble {
        // 2 steps, 3 paths
        let values = vec![
            1.0, 1.0, 1.0, //
            1.1, 0.9, 1.0, //
            1.2, 0.8, 1.3,
        ];
        PathEnsemble::from_grid(PathKind::Price, 2, 3, 0.5, values)
    }

    #[test]
    fn test_shape_and_accessors() {
        let e = sample_ensemble();
        assert_eq!(e.shape(), (3, 3));
        assert_eq!(e.n_steps(), 2);
        assert_eq!(e.value(1, 1), 0.9);
        assert_eq!(e.initial_values(), &[1.0, 1.0, 1.0]);
        assert_eq!(e.terminal_values(), &[1.2, 0.8, 1.3]);
        assert_eq!(e.rows().count(), 3);
    }

    #[test]
    fn test_path_iterator() {
        let e = sample_ensemble();
        let path: Vec<f64> = e.path(1).collect();
        assert_eq!(path, vec![1.0, 0.9, 0.8]);
    }

    #[test]
    fn test_times_and_mean_path() {
        let e = sample_ensemble();
        assert_eq!(e.times(), vec![0.0, 0.5, 1.0]);

        let mean = e.mean_path();
        assert_relative_eq!(mean[0], 1.0);
        assert_relative_eq!(mean[1], 1.0, epsilon = 1e-15);
        assert_relative_eq!(mean[2], 1.1, epsilon = 1e-15);
    }

    #[test]
    fn test_terminal_histogram() {
        let e = sample_ensemble();
        let h = e.terminal_histogram(5).unwrap();
        assert_eq!(h.counts.len(), 5);
        assert_eq!(h.edges.len(), 6);
        assert_eq!(h.total(), 3);
        assert_eq!(*h.edges.last().unwrap(), 1.3);
        assert!(e.terminal_histogram(0).is_none());
    }

    #[test]
    fn test_histogram_constant_values() {
        let h = Histogram::from_values(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(h.edges, vec![1.5, 2.0, 2.5]);
        assert_eq!(h.total(), 3);
        assert_eq!(h.centres(), vec![1.75, 2.25]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_shape_and_grid() {
        let json = serde_json::to_value(sample_ensemble()).unwrap();
        assert_eq!(json["kind"], "price");
        assert_eq!(json["n_steps"], 2);
        assert_eq!(json["n_paths"], 3);
        assert_eq!(json["values"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_path_panics() {
        let e = sample_ensemble();
        let _ = e.path(3);
    }
}
