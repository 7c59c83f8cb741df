// Library for testable modules
pub mod nav;
pub mod story;
pub mod transition;

// Re-export main types used in tests and benches
pub use nav::{Direction, NavState};
pub use story::{builtin_pages, Page, Story};
pub use transition::{flip_variants, FlipParams, FlipVariants, PivotEdge, Turn, TurnFrame};
