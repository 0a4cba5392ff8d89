//! Benchmarks of rawspan, see `benches/`.
