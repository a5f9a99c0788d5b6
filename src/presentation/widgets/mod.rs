pub mod ascii_art;
mod button;
mod footer_bar;
mod header_bar;

pub use ascii_art::AsciiArt;
pub use button::{ImageButton, TextButton, centered_top};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
