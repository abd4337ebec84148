//! # TUI Components
//!
//! Both components are stateless and props-based: they receive everything
//! they draw as struct fields and hold no state between frames.
//!
//! - `TitleBar`: top line with the app name and the current screen
//! - `ScreenPanel`: the core's plain-text frame, with the active line styled
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! └── screen_panel.rs  (Current screen)
//! ```

mod screen_panel;
mod title_bar;

pub use screen_panel::ScreenPanel;
pub use title_bar::TitleBar;
