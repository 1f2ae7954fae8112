//! Grid pathfinding over a level's walkability data.
//!
//! A [`PathFinder`] can exist without a grid: levels configure movement rules
//! before (or without) loading a map, and such a pathfinder simply finds no
//! paths until a grid is attached.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::map::{MapDimensions, TileLayer, TileMap};
use crate::position::Position;

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Per-tile walkability flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkabilityGrid {
    dimensions: MapDimensions,
    blocked: Vec<bool>,
}

impl WalkabilityGrid {
    /// Grid where every in-bounds tile is walkable.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            blocked: vec![false; dimensions.area()],
        }
    }

    /// Grid blocked wherever `obstacles` has a tile.
    pub fn from_obstacles(dimensions: MapDimensions, obstacles: &TileLayer) -> Self {
        let mut grid = Self::open(dimensions);
        for (position, _) in obstacles.occupied() {
            grid.set_blocked(position, true);
        }
        grid
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| !self.blocked[index])
    }

    pub fn set_blocked(&mut self, position: Position, blocked: bool) -> bool {
        match self.index(position) {
            Some(index) => {
                self.blocked[index] = blocked;
                true
            }
            None => false,
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|blocked| **blocked).count()
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFinder {
    allow_diagonal_movement: bool,
    grid: Option<WalkabilityGrid>,
}

impl PathFinder {
    /// Pathfinder without walkability data.
    pub fn new(allow_diagonal_movement: bool) -> Self {
        Self {
            allow_diagonal_movement,
            grid: None,
        }
    }

    pub fn with_grid(grid: WalkabilityGrid, allow_diagonal_movement: bool) -> Self {
        Self {
            allow_diagonal_movement,
            grid: Some(grid),
        }
    }

    /// Builds the grid from `map`, treating `obstacles_layer` as walls.
    ///
    /// A map without that layer is fully walkable.
    pub fn from_map(map: &TileMap, obstacles_layer: &str, allow_diagonal_movement: bool) -> Self {
        let grid = match map.layer(obstacles_layer) {
            Some(layer) => WalkabilityGrid::from_obstacles(map.dimensions(), layer),
            None => WalkabilityGrid::open(map.dimensions()),
        };
        Self::with_grid(grid, allow_diagonal_movement)
    }

    pub fn allow_diagonal_movement(&self) -> bool {
        self.allow_diagonal_movement
    }

    pub fn grid(&self) -> Option<&WalkabilityGrid> {
        self.grid.as_ref()
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.grid
            .as_ref()
            .is_some_and(|grid| grid.is_walkable(position))
    }

    /// Shortest path from `from` to `to` (A*, unit step cost).
    ///
    /// The returned path excludes `from` and ends with `to`. Diagonal steps are
    /// only taken when both adjacent orthogonal tiles are walkable.
    pub fn find_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        let grid = self.grid.as_ref()?;
        if !grid.is_walkable(from) || !grid.is_walkable(to) {
            return None;
        }
        if from == to {
            return Some(Vec::new());
        }

        let mut open = BinaryHeap::new();
        let mut best_cost: HashMap<Position, u32> = HashMap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();

        best_cost.insert(from, 0);
        open.push(Reverse((self.heuristic(from, to), 0u32, from)));

        while let Some(Reverse((_, cost, current))) = open.pop() {
            if current == to {
                return Some(Self::reconstruct(&came_from, from, to));
            }
            if best_cost.get(&current).is_some_and(|best| cost > *best) {
                continue;
            }

            for next in self.neighbours(grid, current) {
                let next_cost = cost + 1;
                if best_cost.get(&next).is_none_or(|best| next_cost < *best) {
                    best_cost.insert(next, next_cost);
                    came_from.insert(next, current);
                    open.push(Reverse((
                        next_cost + self.heuristic(next, to),
                        next_cost,
                        next,
                    )));
                }
            }
        }

        None
    }

    fn neighbours(&self, grid: &WalkabilityGrid, position: Position) -> Vec<Position> {
        let mut neighbours: Vec<Position> = ORTHOGONAL
            .iter()
            .map(|(dx, dy)| position.offset(*dx, *dy))
            .filter(|next| grid.is_walkable(*next))
            .collect();

        if self.allow_diagonal_movement {
            neighbours.extend(
                DIAGONAL
                    .iter()
                    .filter(|(dx, dy)| {
                        grid.is_walkable(position.offset(*dx, 0))
                            && grid.is_walkable(position.offset(0, *dy))
                    })
                    .map(|(dx, dy)| position.offset(*dx, *dy))
                    .filter(|next| grid.is_walkable(*next)),
            );
        }

        neighbours
    }

    fn heuristic(&self, from: Position, to: Position) -> u32 {
        if self.allow_diagonal_movement {
            from.chebyshev_distance(to)
        } else {
            from.manhattan_distance(to)
        }
    }

    fn reconstruct(
        came_from: &HashMap<Position, Position>,
        from: Position,
        to: Position,
    ) -> Vec<Position> {
        let mut path = vec![to];
        let mut current = to;
        while let Some(previous) = came_from.get(&current) {
            if *previous == from {
                break;
            }
            path.push(*previous);
            current = *previous;
        }
        path.reverse();
        path
    }
}
