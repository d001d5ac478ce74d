pub mod date;
pub mod feed;
pub mod magazine;
pub mod selector;

pub use date::parse_issue_date;
pub use feed::{Feed, Item};
pub use magazine::{Format, Kind, Language, Magazine};
pub use selector::Selector;
