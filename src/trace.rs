/*!
The sampler output: a table with one row per iteration and the columns
`iteration`, `x`, `y`.

The table is allocated once with its final shape `(N + 1) × 3` and filled in
iteration order. Row 0 holds the initial state.
*/

use ndarray::{s, Array2, ArrayView1};

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    data: Array2<f64>,
}

impl Trace {
    /// Column names, in storage order.
    pub const COLUMNS: [&'static str; 3] = ["iteration", "x", "y"];

    /// Allocates a trace for `n_steps` iterations and records the initial state in row 0.
    pub(crate) fn with_initial(n_steps: usize, initial: &[f64; 2]) -> Self {
        let mut data = Array2::<f64>::zeros((n_steps + 1, 3));
        data.row_mut(0).assign(&ndarray::arr1(&[0.0, initial[0], initial[1]]));
        Self { data }
    }

    /// Writes the state reached after iteration `i` (1-based) into row `i`.
    pub(crate) fn record(&mut self, i: usize, state: &[f64; 2]) {
        let mut row = self.data.row_mut(i);
        row[0] = i as f64;
        row[1] = state[0];
        row[2] = state[1];
    }

    /// Number of rows, N + 1.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of iterations performed, N.
    pub fn n_iterations(&self) -> usize {
        self.data.nrows() - 1
    }

    /// Row `i` as `[i, x_i, y_i]`. Panics if `i > N`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    pub fn iterations(&self) -> ArrayView1<'_, f64> {
        self.data.column(0)
    }

    pub fn xs(&self) -> ArrayView1<'_, f64> {
        self.data.column(1)
    }

    pub fn ys(&self) -> ArrayView1<'_, f64> {
        self.data.column(2)
    }

    /// The `(x, y)` pairs of all rows, without the index column.
    pub fn states(&self) -> ndarray::ArrayView2<'_, f64> {
        self.data.slice(s![.., 1..])
    }

    pub fn initial_state(&self) -> [f64; 2] {
        [self.data[[0, 1]], self.data[[0, 2]]]
    }

    pub fn final_state(&self) -> [f64; 2] {
        let last = self.data.nrows() - 1;
        [self.data[[last, 1]], self.data[[last, 2]]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}
