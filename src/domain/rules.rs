use super::{Grid, Material};
use rand::{Rng, RngCore};

/// Trait for per-material movement rules.
/// A rule inspects one cell and its neighbours and applies at most one
/// move or swap to the grid.
pub trait MaterialRule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Update the cell at (x, y). Returns true if it moved.
    fn step(&self, grid: &mut Grid, x: i32, y: i32, rng: &mut dyn RngCore) -> bool;
}

/// Uniform left/right pick
fn coin(rng: &mut dyn RngCore) -> i32 {
    if rng.random_bool(0.5) { -1 } else { 1 }
}

/// Move into an empty target or sink through water. Returns true on success.
fn fall_or_sink(grid: &mut Grid, from: (i32, i32), to: (i32, i32)) -> bool {
    match grid.material_at(to.0, to.1) {
        Some(Material::Empty) => {
            grid.move_cell(from, to);
            true
        }
        Some(Material::Water) => {
            grid.swap(from, to);
            true
        }
        _ => false,
    }
}

/// Move into an empty target only
fn flow(grid: &mut Grid, from: (i32, i32), to: (i32, i32)) -> bool {
    if grid.is(to.0, to.1, Material::Empty) {
        grid.move_cell(from, to);
        true
    } else {
        false
    }
}

/// Sand falls, slides diagonally, and sinks through water
#[derive(Clone, Copy)]
pub struct SandRule;

impl MaterialRule for SandRule {
    fn name(&self) -> &'static str {
        "Sand"
    }

    fn description(&self) -> &'static str {
        "Falls, piles diagonally, sinks through water"
    }

    fn step(&self, grid: &mut Grid, x: i32, y: i32, rng: &mut dyn RngCore) -> bool {
        let below = y + 1;
        if fall_or_sink(grid, (x, y), (x, below)) {
            return true;
        }

        let dir = coin(rng);
        fall_or_sink(grid, (x, y), (x + dir, below))
            || fall_or_sink(grid, (x, y), (x - dir, below))
    }
}

/// Water falls, slides diagonally, then spreads sideways.
/// It never displaces anything.
#[derive(Clone, Copy)]
pub struct WaterRule;

impl MaterialRule for WaterRule {
    fn name(&self) -> &'static str {
        "Water"
    }

    fn description(&self) -> &'static str {
        "Falls, flows diagonally, spreads sideways"
    }

    fn step(&self, grid: &mut Grid, x: i32, y: i32, rng: &mut dyn RngCore) -> bool {
        let below = y + 1;
        if flow(grid, (x, y), (x, below)) {
            return true;
        }

        let dir = coin(rng);
        if flow(grid, (x, y), (x + dir, below)) || flow(grid, (x, y), (x - dir, below)) {
            return true;
        }

        let spread = coin(rng);
        flow(grid, (x, y), (x + spread, y)) || flow(grid, (x, y), (x - spread, y))
    }
}

/// Stone falls straight down, sinks through water, and settles for good
/// the first time it cannot move.
#[derive(Clone, Copy)]
pub struct StoneRule;

impl MaterialRule for StoneRule {
    fn name(&self) -> &'static str {
        "Stone"
    }

    fn description(&self) -> &'static str {
        "Falls straight, then stays fixed"
    }

    fn step(&self, grid: &mut Grid, x: i32, y: i32, _rng: &mut dyn RngCore) -> bool {
        if grid.get(x, y).is_some_and(|cell| cell.immobile) {
            return false;
        }

        if fall_or_sink(grid, (x, y), (x, y + 1)) {
            return true;
        }

        grid.mark_immobile(x, y);
        false
    }
}

/// Rule for a material. Empty cells have none.
pub fn rule_for(material: Material) -> Option<&'static dyn MaterialRule> {
    match material {
        Material::Empty => None,
        Material::Sand => Some(&SandRule),
        Material::Water => Some(&WaterRule),
        Material::Stone => Some(&StoneRule),
    }
}

/// Dispatch the cell at (x, y) to its material's rule
pub fn step_cell(grid: &mut Grid, x: i32, y: i32, rng: &mut dyn RngCore) -> bool {
    grid.material_at(x, y)
        .and_then(rule_for)
        .is_some_and(|rule| rule.step(grid, x, y, rng))
}
