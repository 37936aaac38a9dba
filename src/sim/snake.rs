//! Snake body geometry and direction-input buffering.

use std::collections::VecDeque;

use super::grid::{Cell, Direction};

/// Maximum number of buffered direction changes.
const QUEUE_CAP: usize = 3;

/// Bounded FIFO of pending direction changes.
///
/// A change is checked against the effective last-known direction: the
/// newest queued entry, or the snake's current heading when the queue is
/// empty. Reversals and duplicates of it are dropped. On overflow the
/// newest prior entry is evicted so the latest input intent always wins.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    /// Buffer a direction change. Illegal changes are silently dropped.
    pub fn push(&mut self, dir: Direction, heading: Direction) {
        let full = self.pending.len() == QUEUE_CAP;
        // Validate against the entry that would precede `dir` once an
        // overflow eviction has happened, so eviction can never leave a
        // reversal pair behind.
        let effective = if full {
            self.pending[QUEUE_CAP - 2]
        } else {
            self.pending.back().copied().unwrap_or(heading)
        };
        if dir == effective || dir == effective.opposite() {
            return;
        }
        if full {
            self.pending.pop_back();
        }
        self.pending.push_back(dir);
    }

    /// Consume the oldest pending change. Called once per movement step.
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// The snake: ordered body cells with the head at the front.
///
/// Length never drops below 1; consecutive cells are axis-adjacent except
/// transiently after `grow`, which duplicates the tail in place.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    wrap: bool,
}

impl Snake {
    /// Fixed 3-cell starting body, heading right.
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(start);
        body.push_back(Cell::new(start.col - 1, start.row));
        body.push_back(Cell::new(start.col - 2, start.row));
        Self {
            body,
            heading: Direction::Right,
            wrap: false,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() // always false: length never drops below 1
    }

    /// Body cells head-first, for rendering and placement checks.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn toggle_wrap(&mut self) {
        self.wrap = !self.wrap;
    }

    /// One movement step: consume at most one queued direction, then
    /// translate the body by one cell (push new head, drop tail). Length
    /// is unchanged; bounds are checked by the caller afterwards.
    pub fn advance(&mut self, queue: &mut DirectionQueue) {
        if let Some(dir) = queue.pop() {
            self.heading = dir;
        }
        let next = self.head().step(self.heading);
        self.body.push_front(next);
        self.body.pop_back();
    }

    /// Append `n` duplicates of the tail cell. The drawn trail is
    /// unchanged until the next advance pulls the duplicates apart.
    pub fn grow(&mut self, n: usize) {
        let tail = self.body[self.body.len() - 1];
        for _ in 0..n {
            self.body.push_back(tail);
        }
    }

    /// Remove up to `n` tail cells, never shrinking below length 1.
    pub fn shrink(&mut self, n: usize) {
        for _ in 0..n {
            if self.body.len() <= 1 {
                break;
            }
            self.body.pop_back();
        }
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when the head coincides with any other body cell.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Only meaningful when wrap is disabled.
    pub fn out_of_bounds(&self, cols: i32, rows: i32) -> bool {
        !self.head().in_bounds(cols, rows)
    }

    /// Pull the head back onto the grid with floor-mod semantics. Invoked
    /// directly after `advance` when wrap is enabled.
    pub fn wrap_head(&mut self, cols: i32, rows: i32) {
        self.body[0] = self.head().wrapped(cols, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::Direction::*;

    fn drained(queue: &mut DirectionQueue) -> Vec<Direction> {
        std::iter::from_fn(|| queue.pop()).collect()
    }

    #[test]
    fn queue_rejects_reversals_and_duplicates() {
        let mut queue = DirectionQueue::default();
        queue.push(Left, Right); // reversal of heading
        assert!(queue.is_empty());
        queue.push(Right, Right); // duplicate of heading
        assert!(queue.is_empty());

        queue.push(Up, Right);
        queue.push(Down, Right); // reversal of the newest queued entry
        assert_eq!(queue.len(), 1);
        queue.push(Up, Right); // duplicate of the newest queued entry
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn queue_overflow_evicts_the_newest_prior_entry() {
        let mut queue = DirectionQueue::default();
        queue.push(Up, Right);
        queue.push(Right, Right);
        queue.push(Down, Right);
        assert_eq!(queue.len(), 3);

        // Full: Up replaces Down, the newest prior entry.
        queue.push(Up, Right);
        assert_eq!(drained(&mut queue), vec![Up, Right, Up]);
    }

    #[test]
    fn queue_overflow_replacement_still_honors_the_reversal_rule() {
        let mut queue = DirectionQueue::default();
        queue.push(Up, Right);
        queue.push(Right, Right);
        queue.push(Down, Right);

        // Left would sit right after Right once Down is evicted, so it
        // is dropped and the queue is untouched.
        queue.push(Left, Right);
        assert_eq!(drained(&mut queue), vec![Up, Right, Down]);
    }

    #[test]
    fn queue_never_holds_a_reversal_pair() {
        let mut queue = DirectionQueue::default();
        for dir in [Up, Left, Down, Right, Up, Right, Down, Left, Up] {
            queue.push(dir, Right);
            assert!(queue.len() <= 3);
        }
        let order = drained(&mut queue);
        for pair in order.windows(2) {
            assert_ne!(pair[0], pair[1].opposite());
        }
    }

    #[test]
    fn advance_moves_one_cell_and_consumes_one_queued_direction() {
        // 28x24 grid, head at the center heading Right.
        let mut snake = Snake::new(Cell::new(14, 12));
        let mut queue = DirectionQueue::default();
        queue.push(Up, snake.heading());

        snake.advance(&mut queue);
        assert_eq!(snake.head(), Cell::new(14, 11));
        assert_eq!(snake.heading(), Up);
        assert_eq!(snake.len(), 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn advance_keeps_heading_when_queue_is_empty() {
        let mut snake = Snake::new(Cell::new(5, 5));
        let mut queue = DirectionQueue::default();
        snake.advance(&mut queue);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.heading(), Right);
    }

    #[test]
    fn grow_duplicates_the_tail() {
        let mut snake = Snake::new(Cell::new(5, 5));
        let tail: Vec<Cell> = snake.cells().collect();
        snake.grow(2);
        assert_eq!(snake.len(), 5);
        let cells: Vec<Cell> = snake.cells().collect();
        assert_eq!(cells[3], tail[2]);
        assert_eq!(cells[4], tail[2]);

        // The duplicates separate over the next advances.
        let mut queue = DirectionQueue::default();
        snake.advance(&mut queue);
        snake.advance(&mut queue);
        let cells: Vec<Cell> = snake.cells().collect();
        for pair in cells.windows(2) {
            let adjacent = (pair[0].col - pair[1].col).abs() + (pair[0].row - pair[1].row).abs();
            assert_eq!(adjacent, 1);
        }
    }

    #[test]
    fn shrink_never_drops_below_one_cell() {
        let mut snake = Snake::new(Cell::new(5, 5));
        snake.shrink(10);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(5, 5));
    }

    #[test]
    fn self_collision_ignores_the_head_itself() {
        let mut snake = Snake::new(Cell::new(5, 5));
        assert!(!snake.self_collision());

        // Grow, then steer a tight loop so the head re-enters the body.
        snake.grow(3);
        let mut queue = DirectionQueue::default();
        for dir in [Down, Left, Up] {
            queue.push(dir, snake.heading());
            snake.advance(&mut queue);
        }
        assert!(snake.self_collision());
    }

    #[test]
    fn out_of_bounds_and_wrap_agree_on_the_edge() {
        let mut snake = Snake::new(Cell::new(27, 12));
        let mut queue = DirectionQueue::default();
        snake.advance(&mut queue);
        assert_eq!(snake.head(), Cell::new(28, 12));
        assert!(snake.out_of_bounds(28, 24));

        snake.wrap_head(28, 24);
        assert_eq!(snake.head(), Cell::new(0, 12));
        assert!(!snake.out_of_bounds(28, 24));
    }

    #[test]
    fn occupies_covers_the_whole_body() {
        let snake = Snake::new(Cell::new(5, 5));
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(6, 5)));
    }
}
