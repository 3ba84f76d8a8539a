use rand::Rng;

use crate::food::Food;
use crate::snake::Snake;

/// What a committed advance amounted to. Wall and self hits both end the
/// session; they are kept apart so the cause can be logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continuing,
    AteFood,
    HitBoundary,
    HitSelf,
}

impl Outcome {
    pub fn is_fatal(self) -> bool {
        matches!(self, Outcome::HitBoundary | Outcome::HitSelf)
    }
}

/// Run the collision checks for one committed advance. Order is fixed: the
/// apple is checked first so the respawn excludes the fully grown body, the
/// walls next, the snake's own body last. Borrows only for this call.
pub fn evaluate<R: Rng>(snake: &Snake, food: &mut Food, rng: &mut R) -> Outcome {
    let head = snake.head();

    if head == food.position() {
        food.respawn(snake, rng);
        return Outcome::AteFood;
    }

    if !head.in_grid() {
        return Outcome::HitBoundary;
    }

    if snake.hits_itself() {
        return Outcome::HitSelf;
    }

    Outcome::Continuing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_COLS, GRID_ROWS};
    use crate::grid::{Dir, Pos};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(1)
    }

    #[test]
    fn test_head_on_food_respawns_and_reports_eat() {
        let snake = Snake::from_cells(&[Pos::new(3, 3), Pos::new(4, 3)], Dir::Left);
        let mut food = Food::at(Pos::new(3, 3));
        let outcome = evaluate(&snake, &mut food, &mut rng());
        assert_eq!(outcome, Outcome::AteFood);
        assert!(!outcome.is_fatal());
        assert!(!snake.contains(food.position()));
        assert_ne!(food.position(), Pos::new(3, 3));
    }

    #[test]
    fn test_head_one_cell_outside_any_edge_is_fatal() {
        let cases = [
            Pos::new(-1, 5),
            Pos::new(GRID_COLS, 5),
            Pos::new(5, -1),
            Pos::new(5, GRID_ROWS),
        ];
        for head in cases {
            let snake = Snake::from_cells(&[head, Pos::new(5, 5)], Dir::Up);
            let mut food = Food::at(Pos::new(0, 0));
            assert_eq!(evaluate(&snake, &mut food, &mut rng()), Outcome::HitBoundary);
        }
    }

    #[test]
    fn test_head_on_innermost_edge_cells_is_not_fatal() {
        let cases = [
            Pos::new(0, 5),
            Pos::new(GRID_COLS - 1, 5),
            Pos::new(5, 0),
            Pos::new(5, GRID_ROWS - 1),
        ];
        for head in cases {
            let snake = Snake::from_cells(&[head, Pos::new(5, 5)], Dir::Up);
            let mut food = Food::at(Pos::new(9, 9));
            assert_eq!(evaluate(&snake, &mut food, &mut rng()), Outcome::Continuing);
        }
    }

    #[test]
    fn test_head_on_own_body_is_fatal() {
        let snake = Snake::from_cells(
            &[Pos::new(5, 5), Pos::new(5, 6), Pos::new(5, 5), Pos::new(4, 5)],
            Dir::Up,
        );
        let mut food = Food::at(Pos::new(0, 0));
        let outcome = evaluate(&snake, &mut food, &mut rng());
        assert_eq!(outcome, Outcome::HitSelf);
        assert!(outcome.is_fatal());
    }

    #[test]
    fn test_unique_body_keeps_continuing() {
        let snake = Snake::from_cells(&[Pos::new(5, 5), Pos::new(6, 5), Pos::new(7, 5)], Dir::Left);
        let mut food = Food::at(Pos::new(0, 0));
        assert_eq!(evaluate(&snake, &mut food, &mut rng()), Outcome::Continuing);
    }
}
