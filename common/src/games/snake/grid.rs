use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Square playfield of `size` x `size` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        (self.size.max(0) as usize).pow(2)
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(30);
        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(29, 29)));
        assert!(!grid.in_bounds(Point::new(30, 15)));
        assert!(!grid.in_bounds(Point::new(15, -1)));
        assert!(!grid.in_bounds(Point::new(-1, 0)));
    }

    #[test]
    fn test_cells_enumerates_whole_grid() {
        let grid = Grid::new(4);
        assert_eq!(grid.cells().count(), grid.cell_count());
        assert!(grid.cells().all(|p| grid.in_bounds(p)));
    }

    #[test]
    fn test_step_follows_direction_vector() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
    }
}
