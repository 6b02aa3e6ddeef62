use std::collections::VecDeque;

use crate::grid::{wrap_boundary, Direction, Position};

/// The snake's body, head first. Never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    pending_growth: u32,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake {
            body: VecDeque::from([head]),
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn grow(&mut self, amount: u32) {
        self.pending_growth += amount;
    }

    /// Moves the whole body one step. Queued growth is appended as copies of
    /// the current tail first, so new segments appear where the tail was.
    pub fn advance(&mut self, direction: Direction, grid_size: i32) {
        let tail = self.body[self.body.len() - 1];
        for _ in 0..self.pending_growth {
            self.body.push_back(tail);
        }
        self.pending_growth = 0;

        let new_head = wrap_boundary(self.head().step(direction.into()), grid_size);

        // Every segment takes its predecessor's place
        self.body.pop_back();
        self.body.push_front(new_head);
    }

    pub fn contains_position(&self, pos: Position, exclude_head: bool) -> bool {
        let skip = if exclude_head { 1 } else { 0 };
        self.body.iter().skip(skip).any(|segment| *segment == pos)
    }

    pub fn is_self_intersecting(&self) -> bool {
        self.contains_position(self.head(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: i32 = 15;

    fn snake_from(segments: &[(i32, i32)]) -> Snake {
        Snake {
            body: segments.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            pending_growth: 0,
        }
    }

    fn body(snake: &Snake) -> Vec<Position> {
        snake.segments().copied().collect()
    }

    #[test]
    fn test_advance_moves_head() {
        let mut snake = Snake::new(Position::new(8, 8));
        snake.advance(Direction::Right, SIZE);
        assert_eq!(snake.head(), Position::new(9, 8));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_advance_wraps_head() {
        let mut snake = Snake::new(Position::new(15, 8));
        snake.advance(Direction::Right, SIZE);
        assert_eq!(snake.head(), Position::new(1, 8));
    }

    #[test]
    fn test_body_follows_head() {
        let mut snake = snake_from(&[(5, 5), (5, 6), (5, 7)]);
        snake.advance(Direction::Left, SIZE);
        assert_eq!(
            body(&snake),
            vec![Position::new(4, 5), Position::new(5, 5), Position::new(5, 6)]
        );
    }

    #[test]
    fn test_growth_applied_on_next_advance() {
        let mut snake = snake_from(&[(5, 5), (5, 6)]);
        snake.grow(2);
        assert_eq!(snake.len(), 2, "growth is only queued");
        assert_eq!(snake.pending_growth(), 2);

        snake.advance(Direction::Up, SIZE);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.pending_growth(), 0);
        // new segments sit on the old tail cell
        assert_eq!(
            body(&snake),
            vec![
                Position::new(5, 4),
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(5, 6),
            ]
        );

        // and unfold over the following moves
        snake.advance(Direction::Up, SIZE);
        assert_eq!(
            body(&snake),
            vec![
                Position::new(5, 3),
                Position::new(5, 4),
                Position::new(5, 5),
                Position::new(5, 6),
            ]
        );
    }

    #[test]
    fn test_length_grows_by_pending() {
        let mut snake = Snake::new(Position::new(3, 3));
        for growth in [0, 1, 3, 0, 2] {
            snake.grow(growth);
            let before = snake.len();
            snake.advance(Direction::Down, SIZE);
            assert_eq!(snake.len(), before + growth as usize);
            assert_eq!(snake.pending_growth(), 0);
        }
    }

    #[test]
    fn test_single_segment_never_intersects() {
        let mut snake = Snake::new(Position::new(1, 1));
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            snake.advance(dir, SIZE);
            assert!(!snake.is_self_intersecting());
        }
    }

    #[test]
    fn test_self_intersection() {
        // head at (5,5) with the body curling back onto it
        let snake = snake_from(&[(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)]);
        assert!(snake.is_self_intersecting());

        let snake = snake_from(&[(5, 5), (5, 6), (6, 6), (6, 5)]);
        assert!(!snake.is_self_intersecting());
    }

    #[test]
    fn test_turning_into_body_collides() {
        let mut snake = snake_from(&[(5, 5), (5, 6), (6, 6), (6, 5), (7, 5)]);
        snake.advance(Direction::Right, SIZE);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(snake.is_self_intersecting());
    }

    #[test]
    fn test_contains_position() {
        let snake = snake_from(&[(5, 5), (5, 6), (5, 7)]);
        assert!(snake.contains_position(Position::new(5, 5), false));
        assert!(!snake.contains_position(Position::new(5, 5), true));
        assert!(snake.contains_position(Position::new(5, 7), true));
        assert!(!snake.contains_position(Position::new(4, 6), false));
    }
}
