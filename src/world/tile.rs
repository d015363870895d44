//! Terrain: tiles and the grid that holds them.
//!
//! A `Tile` is an immutable (coordinate, kind) value. The grid never edits a
//! tile in place; adding or removing a pit swaps in a fresh `Tile`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Terrain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Pit,
}

impl TileKind {
    /// Pits are impassable, empty tiles are passable.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        matches!(self, TileKind::Empty)
    }
}

/// A single grid cell's terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    coord: Coord,
    kind: TileKind,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(coord: Coord, kind: TileKind) -> Self {
        Self { coord, kind }
    }

    /// Where this tile sits.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Terrain kind.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Whether the terrain can be walked on.
    #[must_use]
    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Whether this tile is a pit.
    #[must_use]
    pub const fn is_pit(&self) -> bool {
        matches!(self.kind, TileKind::Pit)
    }
}

/// Rectangular grid of tiles, stored row-major.
///
/// Backed by `im::Vector`, so cloning a grid between turns is O(1) and
/// replacing one tile only copies a small chunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vector<Tile>,
}

impl Grid {
    /// Create a grid filled with empty tiles.
    ///
    /// Non-positive dimensions produce an empty grid.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::new(Coord::new(x, y), TileKind::Empty)))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Width in tiles.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total tile count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `coord` lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        usize::try_from(coord.y * self.width + coord.x).ok()
    }

    /// Tile at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).and_then(|i| self.tiles.get(i))
    }

    /// Replace the tile at `coord` with a new tile of `kind`.
    ///
    /// Returns the replaced tile, or `None` if `coord` is outside the grid.
    pub fn replace(&mut self, coord: Coord, kind: TileKind) -> Option<Tile> {
        let index = self.index(coord)?;
        Some(self.tiles.set(index, Tile::new(coord, kind)))
    }

    /// Whether the terrain at `coord` is a pit. False outside the grid.
    #[must_use]
    pub fn is_pit(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(Tile::is_pit)
    }

    /// Iterate over tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of pit tiles.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_pit()).count()
    }
}
