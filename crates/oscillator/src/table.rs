//! Tabular text export of a [`Verification`].
//!
//! Each grid node becomes one line with the columns
//!
//! ```text
//! t  q  I  E  q_exact  I_exact  E_exact  abs_dev  rel_dev
//! ```
//!
//! The output is plain delimited text that spreadsheet tools, gnuplot and
//! pandas all read directly.
//!
//! # Example
//!
//! ```
//! use cauchy_oscillator::{Config, GridSpec, Verifier, table::{self, TableOptions}};
//! use cauchy_solvers::runge_kutta::Rk2;
//!
//! let config = Config { t_end: 1.0, grid: GridSpec::Nodes(3), ..Config::default() };
//! let circuit = config.circuit()?;
//! let mut solver = circuit.solver(config.grid()?);
//! solver.solve(&Rk2::new(circuit.params()));
//! let verification = Verifier::new(circuit).verify(&solver)?;
//!
//! let mut out = Vec::new();
//! table::write_table(&mut out, &verification, &TableOptions::default())?;
//!
//! let text = String::from_utf8(out)?;
//! assert_eq!(text.lines().count(), 4); // header + 3 nodes
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{Row, Verification};

/// Column names, in output order.
pub const COLUMNS: [&str; 9] = [
    "t", "q", "I", "E", "q_exact", "I_exact", "E_exact", "abs_dev", "rel_dev",
];

/// Formatting options for [`write_table`].
///
/// Construct with [`TableOptions::new`] and chain builder methods as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    delimiter: char,
    precision: usize,
    header: bool,
}

impl TableOptions {
    /// Creates options with defaults: tab-delimited, 10 significant decimals
    /// in scientific notation, with a header line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: '\t',
            precision: 10,
            header: true,
        }
    }

    /// Sets the column delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of digits after the decimal point.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Omits the header line.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur while exporting a table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write table")]
    Write(#[from] io::Error),
}

/// Writes `verification` as a delimited table to `writer`.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the writer fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    verification: &Verification,
    options: &TableOptions,
) -> Result<(), ExportError> {
    let mut delimiter = [0; 4];
    let delimiter: &str = options.delimiter.encode_utf8(&mut delimiter);

    if options.header {
        writeln!(writer, "{}", COLUMNS.join(delimiter))?;
    }

    for row in verification.rows() {
        let line = row_values(row)
            .iter()
            .map(|value| format!("{value:.prec$e}", prec = options.precision))
            .collect::<Vec<_>>()
            .join(delimiter);
        writeln!(writer, "{line}")?;
    }

    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the table into it.
///
/// # Errors
///
/// Returns [`ExportError::Create`] if the file cannot be created and
/// [`ExportError::Write`] if writing fails.
pub fn write_file(
    path: impl AsRef<Path>,
    verification: &Verification,
    options: &TableOptions,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_table(&mut writer, verification, options)?;
    writer.flush()?;

    Ok(())
}

fn row_values(row: &Row) -> [f64; 9] {
    [
        row.time,
        row.computed[0],
        row.computed[1],
        row.computed_energy,
        row.analytic[0],
        row.analytic[1],
        row.analytic_energy,
        row.abs_deviation,
        row.rel_deviation,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use cauchy_solvers::runge_kutta::Rk4;

    use crate::{Config, GridSpec, Verifier};

    fn small_verification() -> Verification {
        let config = Config {
            t_end: 1.0,
            grid: GridSpec::Nodes(5),
            ..Config::default()
        };
        let circuit = config.circuit().unwrap();
        let mut solver = circuit.solver(config.grid().unwrap());
        solver.solve(&Rk4::new(circuit.params()));
        Verifier::new(circuit).verify(&solver).unwrap()
    }

    fn render(options: &TableOptions) -> String {
        let mut out = Vec::new();
        write_table(&mut out, &small_verification(), options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_and_one_line_per_node() {
        let text = render(&TableOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "t\tq\tI\tE\tq_exact\tI_exact\tE_exact\tabs_dev\trel_dev");
        assert!(lines[1..].iter().all(|line| line.split('\t').count() == 9));
    }

    #[test]
    fn first_row_holds_the_initial_state() {
        let text = render(&TableOptions::new().without_header().precision(3));
        let first: Vec<&str> = text.lines().next().unwrap().split('\t').collect();

        assert_eq!(first[0], "0.000e0");
        assert_eq!(first[1], "1.000e0");
        assert_eq!(first[2], "0.000e0");
        assert_eq!(first[3], "5.000e-1");
    }

    #[test]
    fn custom_delimiter() {
        let text = render(&TableOptions::new().delimiter(',').without_header());
        for line in text.lines() {
            let values: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
            assert_eq!(values.len(), 9);
        }
    }

    #[test]
    fn write_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "cauchy-oscillator-table-{}.tsv",
            std::process::id()
        ));

        write_file(&path, &small_verification(), &TableOptions::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn create_failure_names_the_path() {
        let path = std::env::temp_dir()
            .join("cauchy-oscillator-missing-dir")
            .join("table.tsv");

        let err = write_file(&path, &small_verification(), &TableOptions::default())
            .expect_err("parent directory does not exist");

        assert!(matches!(err, ExportError::Create { .. }));
        assert!(err.to_string().contains("table.tsv"));
    }
}
