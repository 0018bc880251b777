//! Example showing views that write through to their parent matrix
//!
//! This demonstrates:
//! 1. Filling a contiguous block of a dense matrix through a view
//! 2. Strided views selecting every other row and column
//! 3. Using a view as an arithmetic operand and assignment target
//!
//! Run with `RUST_LOG=trace` to see every slice being taken.

use dynmat::{DenseMatrix, SparseMatrix};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

fn init_subscriber() {
    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> dynmat::Result<()> {
    init_subscriber();

    println!("=== Block View ===");
    let mut m = DenseMatrix::<f64>::new(3, 3);
    {
        let mut view = m.slice(0..=1, 0..=1)?;
        view.fill(5.0);
    }
    println!("{m}\n");

    println!("=== Strided View ===");
    let mut grid = DenseMatrix::from_values(4, 5, (0..20).map(f64::from))?;
    {
        let view = grid.slice_stepped(0..=3, 0..=4, 2, 2)?;
        info!(shape = %view.shape(), "strided view");
        println!("{view}\n");
    }

    println!("=== View Arithmetic ===");
    let patch = SparseMatrix::<f64>::identity(2, 3);
    {
        let mut view = grid.slice(2..=3, 2..=4)?;
        let doubled = patch.scale(2.0).try_add(&view)?;
        view.assign(&doubled)?;
    }
    println!("{grid}");

    let norm = grid.frobenius_norm();
    info!(norm, sum = grid.element_sum(), "grid after update");
    Ok(())
}
