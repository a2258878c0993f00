//! Integrates the LC oscillator with RK2 and RK4 side by side.
//!
//! Both schemes start from the same solver setup and run on separate threads.
//! Each trajectory is verified against the analytic solution and written as a
//! tab-separated table.
//!
//! Run with:
//!   cargo run -p cauchy-oscillator --example lc_circuit [config.toml] [out_dir]

use std::{error::Error, path::PathBuf, thread};

use cauchy_core::{LocalSolver, UniformGrid};
use cauchy_oscillator::{
    Config, LcRhs, LcSolver, Verification, Verifier,
    table::{self, TableOptions},
};
use cauchy_solvers::{
    driver,
    runge_kutta::{Rk2, Rk4},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => toml::from_str::<Config>(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    let circuit = config.circuit()?;
    let solver = circuit.solver(config.grid()?);
    let verifier = Verifier::new(circuit);
    let params = circuit.params();

    let (rk2, rk4) = thread::scope(|scope| {
        let rk2 = scope.spawn(|| run(solver.clone(), &Rk2::new(params), &verifier));
        let rk4 = scope.spawn(|| run(solver.clone(), &Rk4::new(params), &verifier));
        (rk2.join(), rk4.join())
    });
    let rk2 = rk2.map_err(|_| "RK2 thread panicked")??;
    let rk4 = rk4.map_err(|_| "RK4 thread panicked")??;

    println!("reference energy: {:e}", verifier.reference_energy());
    for (name, verification) in [("rk2", &rk2), ("rk4", &rk4)] {
        let path = out_dir.join(format!("lc_{name}.tsv"));
        table::write_file(&path, verification, &TableOptions::default())?;

        println!(
            "{name}: max |dE| = {:e}, max |dE|/|E + E0| = {:e}, max state error = {:e} -> {}",
            verification.max_abs_deviation(),
            verification.max_rel_deviation(),
            verification.max_state_error(),
            path.display(),
        );
    }

    Ok(())
}

fn run<L>(
    mut solver: LcSolver<UniformGrid>,
    local: &L,
    verifier: &Verifier,
) -> Result<Verification, driver::Error>
where
    L: LocalSolver<2, LcRhs>,
{
    solver.solve(local);
    verifier.verify(&solver)
}
