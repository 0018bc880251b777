//! Example showing the sparse backend's amortized zero eviction
//!
//! Writes that store zero leave an entry behind until the next compaction
//! sweep. Run with `RUST_LOG=debug` to see each sweep as it happens.

use dynmat::{SparseConfig, SparseMatrix};
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

    let config = SparseConfig::with_eviction_percent(2).with_track_capacity_hint(64);
    let mut m = SparseMatrix::<i64>::with_config(50, 50, &config);
    info!(
        threshold = m.backend().eviction_threshold(),
        "sparse matrix ready"
    );

    for i in 0..50 {
        m.set(i, i, i as i64 + 1)?;
    }
    info!(stored = m.stored_len(), "diagonal written");

    // Clear the even diagonal entries; they stay stored until a sweep
    for i in (0..50).step_by(2) {
        m.set(i, i, 0)?;
        info!(
            stored = m.stored_len(),
            pending = m.backend().pending_touches(),
            "cleared ({i},{i})"
        );
    }

    m.compact();
    info!(stored = m.stored_len(), sum = m.element_sum(), "after final sweep");

    let corner = SparseMatrix::from([[0, 0, 3], [0, 4, 0]]);
    println!("{}", corner.show_entries());
    Ok(())
}
