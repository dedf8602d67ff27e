//! Tile grids and sprite-vs-map collision resolution.
//!
//! A [`TileMap`] is built from rows of symbol characters plus a mapping
//! from solid symbols to tileset texture indices. During construction each
//! placed tile records which of its four edges are *exposed*, meaning the
//! 4-neighbor on that side holds no tile (off-grid counts as empty).
//! Collision resolution only ever tests exposed edges, so a sprite sliding
//! along a wall built from many adjacent tiles never snags on the internal
//! seams between them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::math::rectangle::Rectangle;
use crate::math::vector2::Vector2;
use crate::render::Renderer;
use crate::stage::sprite::Sprite;
use crate::texture::Texture;

/// One solid cell of a [`TileMap`]. Immutable once constructed.
pub struct Tile {
    /// Full cell rectangle in world coordinates.
    pub boundary: Rectangle,
    /// Index into the map's tileset texture list.
    pub texture_index: usize,
    /// Degenerate (zero-width) rectangle along the left edge, present only
    /// when the cell to the left holds no tile.
    pub edge_left: Option<Rectangle>,
    pub edge_right: Option<Rectangle>,
    /// Degenerate (zero-height) rectangle along the top edge.
    pub edge_top: Option<Rectangle>,
    pub edge_bottom: Option<Rectangle>,
}

/// Serializable map description, normally loaded from a JSON file.
#[derive(Debug, Deserialize, Serialize)]
pub struct MapFile {
    pub tile_width: f32,
    pub tile_height: f32,
    /// One string per row, one character per cell.
    pub rows: Vec<String>,
    /// Solid symbols and the tileset texture index each one draws with.
    pub tile_symbols: FxHashMap<char, usize>,
}

impl MapFile {
    pub fn load(path: &str) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read map file {path}: {e}"))?;
        serde_json::from_str(&data).map_err(|e| format!("failed to parse map file {path}: {e}"))
    }
}

/// A rectangular grid of optional solid tiles.
pub struct TileMap {
    /// Raw symbol grid, kept for marker lookups.
    symbols: Vec<Vec<char>>,
    /// Cell -> index into `tiles`, row-major.
    grid: Vec<Option<usize>>,
    tiles: Vec<Tile>,
    textures: Vec<Texture>,
    tile_width: f32,
    tile_height: f32,
    num_rows: usize,
    num_cols: usize,
    removed: bool,
}

impl TileMap {
    /// Build a map from rows of symbols. A tile is placed at every cell
    /// whose symbol appears in `tile_symbols`; other symbols are kept only
    /// as markers for [`TileMap::symbol_positions`].
    ///
    /// Fails if the rows have unequal lengths or a symbol maps to a
    /// texture index beyond `textures`.
    pub fn new(
        rows: Vec<String>,
        tile_symbols: &FxHashMap<char, usize>,
        textures: Vec<Texture>,
        tile_width: f32,
        tile_height: f32,
    ) -> Result<Self, String> {
        let symbols: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let num_rows = symbols.len();
        let num_cols = symbols.first().map_or(0, Vec::len);
        for (r, row) in symbols.iter().enumerate() {
            if row.len() != num_cols {
                return Err(format!(
                    "map row {r} has {} cells, expected {num_cols}",
                    row.len()
                ));
            }
        }
        for (&symbol, &index) in tile_symbols {
            if index >= textures.len() {
                return Err(format!(
                    "symbol '{symbol}' maps to tileset index {index}, but only {} textures were given",
                    textures.len()
                ));
            }
        }

        let solid = |r: isize, c: isize| -> bool {
            r >= 0
                && c >= 0
                && (r as usize) < num_rows
                && (c as usize) < num_cols
                && tile_symbols.contains_key(&symbols[r as usize][c as usize])
        };

        // row-major placement order; resolution tie-breaks follow it
        let mut tiles = Vec::new();
        let mut grid = vec![None; num_rows * num_cols];
        for r in 0..num_rows {
            for c in 0..num_cols {
                let Some(&texture_index) = tile_symbols.get(&symbols[r][c]) else {
                    continue;
                };
                grid[r * num_cols + c] = Some(tiles.len());
                let x = c as f32 * tile_width;
                let y = r as f32 * tile_height;
                let boundary = Rectangle::new(x, y, tile_width, tile_height);
                let (ri, ci) = (r as isize, c as isize);
                tiles.push(Tile {
                    boundary,
                    texture_index,
                    edge_left: (!solid(ri, ci - 1))
                        .then(|| Rectangle::new(x, y, 0.0, tile_height)),
                    edge_right: (!solid(ri, ci + 1))
                        .then(|| Rectangle::new(x + tile_width, y, 0.0, tile_height)),
                    edge_top: (!solid(ri - 1, ci))
                        .then(|| Rectangle::new(x, y, tile_width, 0.0)),
                    edge_bottom: (!solid(ri + 1, ci))
                        .then(|| Rectangle::new(x, y + tile_height, tile_width, 0.0)),
                });
            }
        }

        Ok(Self {
            symbols,
            grid,
            tiles,
            textures,
            tile_width,
            tile_height,
            num_rows,
            num_cols,
            removed: false,
        })
    }

    /// Build a map from a loaded [`MapFile`] and a tileset.
    pub fn from_file(file: &MapFile, textures: Vec<Texture>) -> Result<Self, String> {
        Self::new(
            file.rows.clone(),
            &file.tile_symbols,
            textures,
            file.tile_width,
            file.tile_height,
        )
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// World-space width of the whole grid.
    pub fn width(&self) -> f32 {
        self.num_cols as f32 * self.tile_width
    }

    pub fn height(&self) -> f32 {
        self.num_rows as f32 * self.tile_height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at a cell, if the cell exists and is solid.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        self.grid[row * self.num_cols + col].map(|i| &self.tiles[i])
    }

    /// The raw symbol at a cell, if the cell exists.
    pub fn symbol_at(&self, row: usize, col: usize) -> Option<char> {
        self.symbols.get(row)?.get(col).copied()
    }

    /// World-space centers of every cell holding `symbol`, in row-major
    /// order. Used for spawn markers.
    pub fn symbol_positions(&self, symbol: char) -> Vec<Vector2> {
        let mut positions = Vec::new();
        for (r, row) in self.symbols.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == symbol {
                    positions.push(Vector2::new(
                        c as f32 * self.tile_width + self.tile_width / 2.0,
                        r as f32 * self.tile_height + self.tile_height / 2.0,
                    ));
                }
            }
        }
        positions
    }

    /// First world-space center of a `symbol` cell, if any.
    pub fn first_symbol_position(&self, symbol: char) -> Option<Vector2> {
        self.symbol_positions(symbol).into_iter().next()
    }

    /// Whether the sprite's boundary overlaps any tile. Used for ground
    /// checks, not for resolution.
    pub fn check_overlap(&self, sprite: &Sprite) -> bool {
        let boundary = sprite.boundary();
        self.tiles.iter().any(|t| boundary.overlaps(&t.boundary))
    }

    /// Push `sprite` out of any solid tiles it overlaps.
    ///
    /// Every overlapping tile contributes one single-axis candidate per
    /// exposed edge the sprite straddles; the shortest candidate wins,
    /// ties going to the earliest (tile placement order, then edge order
    /// left, right, top, bottom). The displaced axis of the sprite's
    /// velocity and acceleration is zeroed, so momentum into the surface
    /// stops while perpendicular momentum survives. A tile touched only
    /// on internal seams contributes nothing.
    pub fn prevent_overlap(&self, sprite: &mut Sprite) {
        let boundary = sprite.boundary();
        let mut candidates: SmallVec<[Vector2; 8]> = SmallVec::new();
        for tile in &self.tiles {
            if !boundary.overlaps(&tile.boundary) {
                continue;
            }
            if let Some(edge) = &tile.edge_left
                && boundary.overlaps(edge)
            {
                candidates.push(Vector2::new(tile.boundary.left - boundary.right(), 0.0));
            }
            if let Some(edge) = &tile.edge_right
                && boundary.overlaps(edge)
            {
                candidates.push(Vector2::new(tile.boundary.right() - boundary.left, 0.0));
            }
            if let Some(edge) = &tile.edge_top
                && boundary.overlaps(edge)
            {
                candidates.push(Vector2::new(0.0, tile.boundary.top - boundary.bottom()));
            }
            if let Some(edge) = &tile.edge_bottom
                && boundary.overlaps(edge)
            {
                candidates.push(Vector2::new(0.0, tile.boundary.bottom() - boundary.top));
            }
        }

        if candidates.is_empty() {
            return;
        }
        candidates.sort_by(Vector2::cmp_by_length);
        let mtv = candidates[0];
        sprite.move_by(mtv.x, mtv.y);
        if let Some(physics) = sprite.physics.as_mut() {
            if mtv.x != 0.0 {
                physics.velocity.x = 0.0;
                physics.acceleration.x = 0.0;
            }
            if mtv.y != 0.0 {
                physics.velocity.y = 0.0;
                physics.acceleration.y = 0.0;
            }
        }
    }

    /// Mark this map for removal from its containing group.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for tile in &self.tiles {
            renderer.draw_tile(
                &self.textures[tile.texture_index],
                tile.boundary.left,
                tile.boundary.top,
                tile.boundary.width,
                tile.boundary.height,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn wall_symbols() -> FxHashMap<char, usize> {
        let mut symbols = FxHashMap::default();
        symbols.insert('X', 0);
        symbols
    }

    fn tileset() -> Vec<Texture> {
        vec![Texture::new("tiles", Rectangle::new(0.0, 0.0, 10.0, 10.0))]
    }

    fn map(rows: &[&str]) -> TileMap {
        TileMap::new(
            rows.iter().map(|r| r.to_string()).collect(),
            &wall_symbols(),
            tileset(),
            10.0,
            10.0,
        )
        .unwrap()
    }

    fn sized_sprite(x: f32, y: f32) -> Sprite {
        let mut s = Sprite::new();
        s.set_size(10.0, 10.0);
        s.set_position(x, y);
        s
    }

    // ==================== CONSTRUCTION TESTS ====================

    #[test]
    fn test_unequal_rows_rejected() {
        let result = TileMap::new(
            vec!["XX".into(), "X".into()],
            &wall_symbols(),
            tileset(),
            10.0,
            10.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tileset_index_out_of_range_rejected() {
        let mut symbols = FxHashMap::default();
        symbols.insert('X', 3);
        let result = TileMap::new(vec!["X".into()], &symbols, tileset(), 10.0, 10.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_internal_seams_are_not_exposed() {
        let m = map(&["X", "X"]);
        assert_eq!(m.tiles().len(), 2);
        let top = &m.tiles()[0];
        assert!(top.edge_top.is_some());
        assert!(top.edge_bottom.is_none());
        let bottom = &m.tiles()[1];
        assert!(bottom.edge_top.is_none());
        assert!(bottom.edge_bottom.is_some());
    }

    #[test]
    fn test_tile_at_distinguishes_solid_and_empty_cells() {
        let m = map(&[".X", "X."]);
        assert!(m.tile_at(0, 0).is_none());
        let tile = m.tile_at(0, 1).unwrap();
        assert!(approx_eq(tile.boundary.left, 10.0));
        assert!(approx_eq(tile.boundary.top, 0.0));
        assert!(m.tile_at(1, 0).is_some());
        assert!(m.tile_at(2, 0).is_none());
    }

    #[test]
    fn test_symbol_positions_are_cell_centers() {
        let m = map(&["..P", "P.."]);
        let positions = m.symbol_positions('P');
        assert_eq!(positions.len(), 2);
        assert!(approx_eq(positions[0].x, 25.0));
        assert!(approx_eq(positions[0].y, 5.0));
        assert!(approx_eq(positions[1].x, 5.0));
        assert!(approx_eq(positions[1].y, 15.0));
    }

    // ==================== RESOLUTION TESTS ====================

    #[test]
    fn test_wall_pushes_horizontally_without_corner_snag() {
        // sprite straddles the seam between two stacked wall tiles; the
        // only tested edges are the vertical ones, so the push is purely
        // horizontal
        let m = map(&[".X", ".X"]);
        let mut s = sized_sprite(7.0, 10.0);
        m.prevent_overlap(&mut s);
        assert!(approx_eq(s.x, 5.0));
        assert!(approx_eq(s.y, 10.0));
    }

    #[test]
    fn test_displaced_axis_momentum_is_zeroed() {
        let m = map(&[".X", ".X"]);
        let mut s = sized_sprite(7.0, 10.0);
        s.set_physics(0.0, 100.0, 0.0);
        let physics = s.physics.as_mut().unwrap();
        physics.velocity.set_values(5.0, 3.0);
        m.prevent_overlap(&mut s);
        let physics = s.physics.as_ref().unwrap();
        assert!(approx_eq(physics.velocity.x, 0.0));
        assert!(approx_eq(physics.velocity.y, 3.0));
    }

    #[test]
    fn test_landing_on_floor_pushes_up() {
        let m = map(&["XXX"]);
        let mut s = sized_sprite(15.0, -2.0);
        m.prevent_overlap(&mut s);
        assert!(approx_eq(s.y, -5.0));
        assert!(approx_eq(s.x, 15.0));
    }

    #[test]
    fn test_tile_touched_only_on_seams_is_permeable() {
        // sprite fully inside a single tile straddles no edge line
        let m = map(&["X"]);
        let mut s = Sprite::new();
        s.set_size(6.0, 6.0);
        s.set_position(5.0, 5.0);
        m.prevent_overlap(&mut s);
        assert!(approx_eq(s.x, 5.0));
        assert!(approx_eq(s.y, 5.0));
    }

    #[test]
    fn test_check_overlap_uses_full_boundaries() {
        let m = map(&["X"]);
        let mut s = Sprite::new();
        s.set_size(6.0, 6.0);
        s.set_position(5.0, 5.0);
        assert!(m.check_overlap(&s));
        s.set_position(50.0, 50.0);
        assert!(!m.check_overlap(&s));
    }

    // ==================== MAP FILE TESTS ====================

    #[test]
    fn test_map_file_parses_from_json() {
        let json = r#"{
            "tile_width": 16.0,
            "tile_height": 16.0,
            "rows": ["XX", ".."],
            "tile_symbols": {"X": 0}
        }"#;
        let file: MapFile = serde_json::from_str(json).unwrap();
        let m = TileMap::from_file(
            &file,
            vec![Texture::new("tiles", Rectangle::new(0.0, 0.0, 16.0, 16.0))],
        )
        .unwrap();
        assert_eq!(m.tiles().len(), 2);
        assert!(approx_eq(m.width(), 32.0));
    }
}
