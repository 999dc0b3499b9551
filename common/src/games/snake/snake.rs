use std::collections::{HashSet, VecDeque};

use super::grid::Point;
use super::types::Direction;

/// Ordered body, head first. `body_set` mirrors `body` for O(1) lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
}

impl Snake {
    /// Lays `length` segments out behind `head`, opposite to `direction`.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);

        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            body_set.insert(segment);
            segment = segment.step(behind);
        }

        Self {
            body,
            body_set,
            direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn next_head(&self) -> Point {
        self.head().step(self.direction)
    }

    /// Rejects the exact reverse of the current heading.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lays_body_behind_head() {
        let snake = Snake::new(Point::new(15, 15), Direction::Right, 3);
        let body: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![Point::new(15, 15), Point::new(14, 15), Point::new(13, 15)]
        );
        assert_eq!(snake.head(), Point::new(15, 15));
        assert_eq!(snake.tail(), Point::new(13, 15));
    }

    #[test]
    fn test_reverse_direction_rejected() {
        let mut snake = Snake::new(Point::new(15, 15), Direction::Right, 3);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.set_direction(Direction::Down));
    }

    #[test]
    fn test_push_and_pop_keep_lookup_in_sync() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Down, 3);
        let next = snake.next_head();
        assert_eq!(next, Point::new(5, 6));
        snake.push_head(next);
        assert!(snake.contains(&next));
        assert_eq!(snake.len(), 4);

        let tail = snake.pop_tail();
        assert_eq!(tail, Some(Point::new(5, 3)));
        assert!(!snake.contains(&Point::new(5, 3)));
        assert_eq!(snake.len(), 3);
    }
}
