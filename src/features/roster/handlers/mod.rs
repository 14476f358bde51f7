pub mod roster_handler;

pub use roster_handler::{__path_list_users, __path_roster_html, list_users, roster_html};
