/// Direction of the most recent page turn. Parameterizes the animation only;
/// it never affects index correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    /// Pre-first-interaction state; renders without an entry animation.
    None,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::None => Direction::None,
        }
    }
}

/// Where the reader is: current page index plus the direction of the last
/// turn. The index is always within `[0, page_count - 1]`.
#[derive(Debug, Clone, Copy)]
pub struct NavState {
    current: usize,
    last: usize,
    direction: Direction,
}

impl NavState {
    /// `page_count` must be at least 1; `Story::new` guarantees that upstream.
    pub fn new(page_count: usize) -> Self {
        debug_assert!(page_count >= 1);
        Self {
            current: 0,
            last: page_count.saturating_sub(1),
            direction: Direction::None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance (`+1`) or retreat (`-1`) by one page, clamping at both ends.
    /// Never fails; at a boundary the index is a no-op but the direction still
    /// updates.
    pub fn navigate(&mut self, delta: isize) {
        self.direction = if delta > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let proposed = self.current as isize + delta;
        self.current = proposed.clamp(0, self.last as isize) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_walk_saturates_at_last_page() {
        let page_count = 5;
        for n in 1..=10 {
            let mut nav = NavState::new(page_count);
            for _ in 0..n {
                nav.navigate(1);
            }
            assert_eq!(nav.current(), n.min(page_count - 1));
            assert_eq!(nav.direction(), Direction::Forward);
        }
    }

    #[test]
    fn backward_walk_saturates_at_first_page() {
        let page_count = 5;
        for n in 1..=10 {
            let mut nav = NavState::new(page_count);
            for _ in 0..page_count {
                nav.navigate(1);
            }
            for _ in 0..n {
                nav.navigate(-1);
            }
            assert_eq!(nav.current(), (page_count - 1).saturating_sub(n));
            assert_eq!(nav.direction(), Direction::Backward);
        }
    }

    #[test]
    fn boundary_turns_are_idempotent_on_index_but_update_direction() {
        let mut nav = NavState::new(3);
        nav.navigate(-1);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), Direction::Backward);
        nav.navigate(-1);
        assert_eq!(nav.current(), 0);

        for _ in 0..2 {
            nav.navigate(1);
        }
        assert_eq!(nav.current(), 2);
        nav.navigate(1);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn three_page_scenario() {
        // pages = [P0, P1, P2], start at 0
        let mut nav = NavState::new(3);
        assert_eq!(nav.direction(), Direction::None);

        nav.navigate(1);
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.direction(), Direction::Forward);

        nav.navigate(1);
        assert_eq!(nav.current(), 2);

        nav.navigate(1);
        assert_eq!(nav.current(), 2); // clamped
    }

    #[test]
    fn single_page_story_never_moves() {
        let mut nav = NavState::new(1);
        nav.navigate(1);
        assert_eq!(nav.current(), 0);
        nav.navigate(-1);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn starts_at_cover_with_no_direction() {
        let nav = NavState::new(7);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), Direction::None);
    }
}
