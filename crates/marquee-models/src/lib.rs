pub mod collection;
pub mod list;
pub mod movie;
pub mod theme;

pub use collection::Collection;
pub use list::CustomList;
pub use movie::{Movie, MovieId};
pub use theme::{builtin_themes, theme_by_name, ThemeColors, ThemePalette, DEFAULT_THEME};

