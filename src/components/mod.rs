pub mod app;
pub mod raf_ticker;
pub mod settings_panel;
pub mod splash;

pub use app::App;
pub use raf_ticker::RafTicker;
pub use splash::{Splash, SplashProps};
