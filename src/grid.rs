use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{bail, Context};
use rand::Rng;

use crate::common::{Environment, Position, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
    Start,
    Goal,
}

impl Cell {
    pub fn is_passable(&self) -> bool {
        !matches!(self, Cell::Blocked)
    }

    fn from_symbol(ch: char) -> anyhow::Result<Self> {
        match ch {
            '.' => Ok(Cell::Free),
            'X' => Ok(Cell::Blocked),
            'S' => Ok(Cell::Start),
            'G' => Ok(Cell::Goal),
            other => bail!("unknown grid symbol {other:?}, expected one of S G X ."),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Blocked => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }
}

/// Rectangular traversability grid with implicit 4-directional adjacency
/// and unit edge cost.
#[derive(Debug, Clone)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    cells: Vec<Vec<Cell>>,
    start: Option<Position>,
    goal: Option<Position>,
}

impl Grid {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> anyhow::Result<Self> {
        let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut goal = None;

        for (x, line) in lines.iter().enumerate() {
            let mut row = Vec::new();
            for (y, ch) in line.as_ref().chars().filter(|ch| !ch.is_whitespace()).enumerate() {
                let cell = Cell::from_symbol(ch)
                    .with_context(|| format!("bad cell at row {x}, column {y}"))?;
                match cell {
                    Cell::Start => start = Some((x, y)),
                    Cell::Goal => goal = Some((x, y)),
                    _ => {}
                }
                row.push(cell);
            }
            cells.push(row);
        }

        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            bail!("grid is empty");
        }
        if cells.iter().any(|row| row.len() != width) {
            bail!("grid rows have inconsistent widths");
        }

        Ok(Grid {
            height,
            width,
            cells,
            start,
            goal,
        })
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open grid file {path}"))?;
        let reader = BufReader::new(file);
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("failed to read grid file {path}"))?;
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        Self::from_lines(&lines)
    }

    /// The 4x5 demonstration grid used for strategy comparison runs.
    pub fn demo() -> Self {
        Self::from_lines(&["S..XG", ".X...", ".XXX.", "....."]).unwrap()
    }

    /// Generates a grid with obstacles drawn independently per cell.
    /// Start and goal corners are always kept free.
    pub fn random<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        obstacle_density: f64,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        if height == 0 || width == 0 {
            bail!("random grid dimensions must be non-zero");
        }
        if !(0.0..=1.0).contains(&obstacle_density) {
            bail!("obstacle density must lie in [0, 1], got {obstacle_density}");
        }

        let mut cells = vec![vec![Cell::Free; width]; height];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen::<f64>() < obstacle_density {
                    *cell = Cell::Blocked;
                }
            }
        }
        cells[0][0] = Cell::Start;
        cells[height - 1][width - 1] = Cell::Goal;

        Ok(Grid {
            height,
            width,
            cells,
            start: Some((0, 0)),
            goal: Some((height - 1, width - 1)),
        })
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        x < self.height && y < self.width && self.cells[x][y].is_passable()
    }

    pub fn get_neighbors(&self, x: usize, y: usize) -> Vec<Position> {
        let directions = [(-1, 0), (1, 0), (0, -1), (0, 1)]; // Up, down, left, right
        let mut neighbors = Vec::new();

        for &(dx, dy) in &directions {
            let new_x = x as i64 + dx;
            let new_y = y as i64 + dy;
            if new_x >= 0
                && new_y >= 0
                && new_x < self.height as i64
                && new_y < self.width as i64
                && self.cells[new_x as usize][new_y as usize].is_passable()
            {
                neighbors.push((new_x as usize, new_y as usize));
            }
        }

        neighbors
    }

    /// Renders the grid with path cells overlaid as `*`, keeping the start
    /// and goal symbols visible.
    pub fn render_with_path(&self, path: &[Position]) -> String {
        let mut rows: Vec<Vec<char>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect();
        for &(x, y) in path {
            if rows[x][y] != 'S' && rows[x][y] != 'G' {
                rows[x][y] = '*';
            }
        }
        rows.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|ch| ch.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Environment for Grid {
    type Node = Position;

    fn contains(&self, node: &Position) -> bool {
        node.0 < self.height && node.1 < self.width && self.cells[node.0][node.1].is_passable()
    }

    fn neighbors(&self, node: &Position) -> Result<Vec<(Position, f64)>, SearchError> {
        // Out-of-range is "no neighbors" in grid mode, never an error.
        if node.0 >= self.height || node.1 >= self.width {
            return Ok(Vec::new());
        }
        Ok(self
            .get_neighbors(node.0, node.1)
            .into_iter()
            .map(|neighbor| (neighbor, 1.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_demo_grid() {
        let grid = Grid::demo();

        assert_eq!(grid.height, 4);
        assert_eq!(grid.width, 5);
        assert_eq!(grid.start(), Some((0, 0)));
        assert_eq!(grid.goal(), Some((0, 4)));

        assert!(grid.is_passable(0, 0));
        assert!(!grid.is_passable(0, 3));
        assert!(!grid.is_passable(1, 1));
    }

    #[test]
    fn test_neighbor_order_and_bounds() {
        let grid = Grid::demo();

        // Fixed direction order: up, down, left, right.
        assert_eq!(grid.get_neighbors(1, 3), vec![(1, 2), (1, 4)]);
        assert_eq!(grid.get_neighbors(0, 0), vec![(1, 0), (0, 1)]);

        // Out-of-range queries yield no neighbors rather than an error.
        assert_eq!(grid.neighbors(&(99, 99)).unwrap(), Vec::new());
    }

    #[test]
    fn test_reject_unknown_symbol() {
        assert!(Grid::from_lines(&["S.?G"]).is_err());
    }

    #[test]
    fn test_reject_ragged_rows() {
        assert!(Grid::from_lines(&["S..", ".G"]).is_err());
    }

    #[test]
    fn test_random_grid_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = Grid::random(8, 8, 0.3, &mut rng_a).unwrap();
        let b = Grid::random(8, 8, 0.3, &mut rng_b).unwrap();

        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(a.is_passable(x, y), b.is_passable(x, y));
            }
        }
        assert_eq!(a.start(), Some((0, 0)));
        assert_eq!(a.goal(), Some((7, 7)));
    }

    #[test]
    fn test_render_with_path() {
        let grid = Grid::from_lines(&["S.G"]).unwrap();
        let rendered = grid.render_with_path(&[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(rendered, "S * G");
    }
}
