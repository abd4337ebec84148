use crate::core::state::App;
use crate::core::view;
use crate::tui::component::Component;
use crate::tui::components::{ScreenPanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0)]);
    let [title_area, _gap, main_area] = layout.areas(frame.area());

    TitleBar::for_screen(app.kind()).render(frame, title_area);

    let view = view::render(app);
    ScreenPanel::new(&view).render(frame, main_area);
}
