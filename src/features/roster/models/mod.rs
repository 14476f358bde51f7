mod roster_view;

pub use roster_view::{RosterCard, RosterView, EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER};
