//! Throughput benchmarks for the encode and decode pipelines.
//!
//! Measures wall-clock time per call for regression testing during
//! development. Use the numbers for relative comparisons only.
//!
//! Usage:
//!   cargo run --release --bin bench          # Run with default 100 iterations
//!   cargo run --release --bin bench -- 1000  # Run with custom iteration count

#![allow(clippy::cast_precision_loss)]

use dnacodec::{decode, encode};
use std::env;
use std::hint::black_box;
use std::time::Instant;

const DEFAULT_ITERATIONS: usize = 100;

struct BenchConfig {
    name: &'static str,
    /// Input size in bytes.
    size: usize,
    /// Restrict generated text to ASCII.
    ascii: bool,
}

const BENCHMARKS: &[BenchConfig] = &[
    BenchConfig {
        name: "ascii-64",
        size: 64,
        ascii: true,
    },
    BenchConfig {
        name: "ascii-4k",
        size: 4096,
        ascii: true,
    },
    BenchConfig {
        name: "ascii-64k",
        size: 65536,
        ascii: true,
    },
    BenchConfig {
        name: "utf8-64k",
        size: 65536,
        ascii: false,
    },
];

/// Deterministic pseudo-random text of roughly `size` bytes.
fn make_text(config: &BenchConfig) -> String {
    const WIDE: [char; 4] = ['é', 'ß', '✓', '🧬'];

    let mut text = String::with_capacity(config.size + 4);
    let mut state: u64 = 42;
    while text.len() < config.size {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let pick = (state >> 33) as usize;
        if !config.ascii && pick % 8 == 0 {
            text.push(WIDE[pick % WIDE.len()]);
        } else {
            text.push(char::from(b' ' + (pick % 95) as u8));
        }
    }
    text
}

fn report(name: &str, bytes: usize, start: Instant, iterations: usize) {
    let total_us = start.elapsed().as_secs_f64() * 1_000_000.0;
    let per_iter_us = total_us / iterations as f64;
    let throughput_mbps = bytes as f64 / per_iter_us;

    println!("{name:<20} {per_iter_us:>10.2} µs/iter  {throughput_mbps:>8.2} MB/s  ({bytes} bytes)");
}

fn bench_encode(config: &BenchConfig, iterations: usize) {
    let text = make_text(config);

    // Warmup run
    black_box(encode(&text));

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(encode(black_box(&text)));
    }

    report(config.name, text.len(), start, iterations);
}

fn bench_decode(config: &BenchConfig, iterations: usize) {
    let strand = encode(&make_text(config)).dna_positive;

    // Warmup run
    black_box(decode(&strand));

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(decode(black_box(&strand)));
    }

    report(config.name, strand.len() / 4, start, iterations);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let iterations = if args.len() >= 2 {
        args[1].parse().unwrap_or(DEFAULT_ITERATIONS)
    } else {
        DEFAULT_ITERATIONS
    };

    println!("dnacodec Benchmarks");
    println!("===================");
    println!("Iterations: {iterations}\n");

    println!(
        "{:<20} {:>18}  {:>13}  Size",
        "Test", "Time", "Throughput"
    );

    println!("\nEncode:");
    for config in BENCHMARKS {
        bench_encode(config, iterations);
    }

    println!("\nDecode:");
    for config in BENCHMARKS {
        bench_decode(config, iterations);
    }
}
