//! Sweep and rasterize throughput on grids of increasing size

use std::time::Instant;
use falling_sand::{Cell, Grid, Material, PixelBuffer};
use falling_sand::domain::{ScanOrder, sweep, sweep_with_order};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Grid with the top half randomly filled, roughly a third each material
fn seeded_grid(width: usize, height: usize, rng: &mut Pcg32) -> Grid {
    let mut grid = Grid::new(width, height, rng, 10.0);
    let materials = [Material::Sand, Material::Water, Material::Stone];
    for y in 0..height / 2 {
        for x in 0..width {
            if rng.random_bool(0.6) {
                let material = materials[rng.random_range(0..materials.len())];
                grid.set(x as i32, y as i32, Cell::new(material, 0.0));
            }
        }
    }
    grid
}

fn benchmark_sweep(size: usize, iterations: u32) -> (f64, usize) {
    let mut rng = Pcg32::seed_from_u64(size as u64);
    let mut grid = seeded_grid(size, size, &mut rng);

    let mut moved = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        moved += sweep(&mut grid, &mut rng).moved;
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, moved / iterations as usize)
}

fn benchmark_fixed_order(size: usize, iterations: u32) -> f64 {
    let mut rng = Pcg32::seed_from_u64(size as u64);
    let mut grid = seeded_grid(size, size, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        sweep_with_order(&mut grid, ScanOrder::LeftToRight, &mut rng);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_rasterize(size: usize, iterations: u32) -> f64 {
    let mut rng = Pcg32::seed_from_u64(size as u64);
    let grid = seeded_grid(size, size, &mut rng);
    let mut buffer = PixelBuffer::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        buffer.rasterize(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Falling Sand Sweep Benchmark ===\n");

    let sizes = [120, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>12}",
        "Size", "Sweep", "FixedOrder", "Rasterize", "Moved/tick");
    println!("{:-<64}", "");

    for size in sizes {
        let (sweep_ms, moved) = benchmark_sweep(size, iterations);
        let fixed_ms = benchmark_fixed_order(size, iterations);
        let raster_ms = benchmark_rasterize(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>12.2} {:>12}",
            format!("{}x{}", size, size),
            sweep_ms,
            fixed_ms,
            raster_ms,
            moved
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");
    let cells = 2000 * 2000;
    let (sweep_ms, _) = benchmark_sweep(2000, iterations);
    println!("Sweep:     {:.2} ms/tick, {:.1}M cells/sec",
        sweep_ms, (cells as f64) / (sweep_ms / 1000.0) / 1_000_000.0);
}
