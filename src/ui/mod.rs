pub mod icons;
pub mod output;
pub mod prompt;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, success, warn};
pub use prompt::confirm;
pub use table::{catalog_table, stats_table};
pub use theme::{Theme, theme};
