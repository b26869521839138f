//! Interactive building blocks: the search field and the header auth toggle.

pub mod auth_toggle;
pub mod search_input;

pub use auth_toggle::{AuthLabel, AuthToggle};
pub use search_input::{SearchInput, SearchInputProps};
