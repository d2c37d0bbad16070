//! Small value types for the grid world: positions, movement directions, and
//! boolean grids (walls, food) with an ASCII layout parser.

use strum_macros::{Display, EnumIter};

/// A cell coordinate. Layouts are bordered by walls, so signed coordinates
/// only show up transiently when applying a movement delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Manhattan distance between two positions.
pub fn manhattan(a: Position, b: Position) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Euclidean distance between two positions.
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The four movement directions, in the enumeration order successor
    /// generation uses. Stop is deliberately absent.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The movement delta of this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn apply(self, position: Position) -> Position {
        let (dx, dy) = self.vector();
        Position::new(position.x + dx, position.y + dy)
    }
}

/// A rectangular grid of booleans, used for both walls and food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.x < 0
            || position.y < 0
            || position.x as usize >= self.width
            || position.y as usize >= self.height
        {
            return None;
        }
        Some(position.y as usize * self.width + position.x as usize)
    }

    /// Whether the cell at `position` is set. Out-of-bounds positions read as
    /// unset, so callers probing past a layout's wall border just see empty.
    pub fn get(&self, position: Position) -> bool {
        self.index(position).map_or(false, |i| self.cells[i])
    }

    pub fn set(&mut self, position: Position, value: bool) {
        let i = self.index(position).expect("position out of bounds");
        self.cells[i] = value;
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All set cells, in column-major enumeration order.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = vec![];
        for x in 0..self.width {
            for y in 0..self.height {
                let position = Position::new(x as i32, y as i32);
                if self.get(position) {
                    positions.push(position);
                }
            }
        }
        positions
    }
}

/// A parsed ASCII maze layout: `%` wall, `.` food, `P` the agent start. The
/// first text line is the top row of the maze, so rows are parsed in reverse
/// to keep north as increasing y.
#[derive(Debug, Clone)]
pub struct Layout {
    pub walls: Grid,
    pub food: Grid,
    pub start: Position,
}

impl Layout {
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut start = Position::new(1, 1);

        for (row_index, row) in rows.iter().enumerate() {
            let y = (height - 1 - row_index) as i32;
            for (x, cell) in row.chars().enumerate() {
                let position = Position::new(x as i32, y);
                match cell {
                    '%' => walls.set(position, true),
                    '.' => food.set(position, true),
                    'P' => start = position,
                    _ => {}
                }
            }
        }

        Self { walls, food, start }
    }
}
