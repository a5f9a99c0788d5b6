//! UI screens.

mod app;
mod article_screen;
mod dice_screen;
mod greeting_screen;
mod help_overlay;
mod lemonade_screen;
mod quadrant_screen;
mod splash_screen;
mod task_screen;
mod utils;

pub use app::App;
pub use article_screen::ArticleScreen;
pub use dice_screen::DiceScreen;
pub use greeting_screen::GreetingScreen;
pub use help_overlay::HelpOverlay;
pub use lemonade_screen::LemonadeScreen;
pub use quadrant_screen::QuadrantScreen;
pub use splash_screen::{SplashScreen, SplashState};
pub use task_screen::TaskScreen;
