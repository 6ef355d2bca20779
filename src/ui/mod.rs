pub mod celebration;
pub mod components;
pub mod interface;
pub mod theme;

pub use celebration::{celebration_channel, CelebrationHandler};
pub use components::{Display, DisplayOptions};
pub use interface::GameInterface;
pub use theme::{Theme, ThemeManager};
