use std::collections::VecDeque;

use crate::config::{GRID_COLS, GRID_ROWS};
use crate::grid::{Dir, Pos};

pub const START_LENGTH: usize = 2;

pub struct Snake {
    body: VecDeque<Pos>,
    heading: Dir,
    // Steering is staged here and committed at the next advance, so input
    // between two ticks is always checked against the heading the snake is
    // actually travelling in.
    pending_heading: Option<Dir>,
    pending_growth: bool,
}

impl Snake {
    /// Two segments just left of the grid center, heading left.
    pub fn new() -> Self {
        let head = Pos::new(GRID_COLS / 2 - 1, GRID_ROWS / 2 - 1);
        let mut body = VecDeque::with_capacity(START_LENGTH);
        body.push_back(head);
        body.push_back(Pos::new(head.x + 1, head.y));

        Self {
            body,
            heading: Dir::Left,
            pending_heading: None,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Pos {
        *self.body.front().expect("snake body is never empty")
    }

    #[cfg(test)]
    pub fn heading(&self) -> Dir {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.body.iter().any(|&c| c == p)
    }

    /// Stage a direction change for the next tick. A turn straight back into
    /// the neck is ignored; later steers in the same frame window overwrite
    /// earlier ones.
    pub fn steer(&mut self, dir: Dir) {
        if dir != self.heading.opposite() {
            self.pending_heading = Some(dir);
        }
    }

    /// The cell the next advance will move the head into.
    pub fn next_head(&self) -> Pos {
        self.head().step(self.pending_heading.unwrap_or(self.heading))
    }

    /// Keep the tail on the next advance (net length +1).
    pub fn schedule_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Commit one tick of movement. The only mutation path for the body:
    /// the staged heading becomes current, the new head is pushed, and the
    /// tail is popped unless growth was scheduled.
    pub fn advance(&mut self) {
        if let Some(dir) = self.pending_heading.take() {
            self.heading = dir;
        }
        let new_head = self.head().step(self.heading);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// True when the head sits on any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[Pos], heading: Dir) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            heading,
            pending_heading: None,
            pending_growth: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_starts_with_two_cells_heading_left() {
        let snake = Snake::new();
        assert_eq!(snake.len(), START_LENGTH);
        assert_eq!(snake.head(), Pos::new(7, 7));
        assert_eq!(snake.cells().collect::<Vec<_>>(), vec![Pos::new(7, 7), Pos::new(8, 7)]);
        assert_eq!(snake.heading(), Dir::Left);
    }

    #[test]
    fn test_advance_moves_without_changing_length() {
        let mut snake = Snake::new();
        snake.advance();
        assert_eq!(snake.head(), Pos::new(6, 7));
        assert_eq!(snake.len(), START_LENGTH);
    }

    #[test]
    fn test_advance_with_scheduled_growth_keeps_tail() {
        let mut snake = Snake::from_cells(&[Pos::new(5, 5), Pos::new(6, 5)], Dir::Left);
        snake.schedule_growth();
        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![Pos::new(4, 5), Pos::new(5, 5), Pos::new(6, 5)]
        );

        // The flag is consumed: the following advance pops the tail again.
        snake.advance();
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_steer_ignores_direct_reversal() {
        let mut snake = Snake::new();
        snake.steer(Dir::Right);
        snake.advance();
        assert_eq!(snake.heading(), Dir::Left);
        assert_eq!(snake.head(), Pos::new(6, 7));
    }

    #[test]
    fn test_steer_turns_at_next_advance() {
        let mut snake = Snake::new();
        snake.steer(Dir::Up);
        assert_eq!(snake.heading(), Dir::Left);
        snake.advance();
        assert_eq!(snake.heading(), Dir::Up);
        assert_eq!(snake.head(), Pos::new(7, 6));
    }

    #[test]
    fn test_two_steers_between_ticks_cannot_reverse() {
        // Travelling Up, steer Left then Down before the tick commits. The
        // Down press is still a reversal of the committed heading and must
        // not sneak in behind the staged Left turn.
        let mut snake = Snake::from_cells(&[Pos::new(5, 5), Pos::new(5, 6)], Dir::Up);
        snake.steer(Dir::Left);
        snake.steer(Dir::Down);
        snake.advance();
        assert_eq!(snake.heading(), Dir::Left);
    }

    #[test]
    fn test_hits_itself_detects_head_on_body() {
        // Head bent back onto the second segment.
        let snake = Snake::from_cells(
            &[Pos::new(5, 5), Pos::new(5, 6), Pos::new(5, 5), Pos::new(4, 5)],
            Dir::Up,
        );
        assert!(snake.hits_itself());

        let clean = Snake::from_cells(&[Pos::new(5, 5), Pos::new(5, 6), Pos::new(4, 6)], Dir::Up);
        assert!(!clean.hits_itself());
    }

    #[test]
    fn test_next_head_tracks_pending_heading() {
        let mut snake = Snake::from_cells(&[Pos::new(5, 5), Pos::new(6, 5)], Dir::Left);
        assert_eq!(snake.next_head(), Pos::new(4, 5));
        snake.steer(Dir::Down);
        assert_eq!(snake.next_head(), Pos::new(5, 6));
    }
}
