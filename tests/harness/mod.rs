use std::sync::{Arc, Mutex};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use dyntitle::app::settings::RotatorSettings;
use dyntitle::app::state::AppState;
use dyntitle::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 60;
pub const TEST_HEIGHT: u16 = 5;

pub fn create_test_state(settings: &RotatorSettings) -> AppState {
    let document = Arc::new(Mutex::new(settings.build_document().unwrap()));
    AppState::new("dyntitle", settings, document)
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    terminal
        .draw(|frame| MainLayout::render(frame, state))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// One line per terminal row, trailing blanks trimmed.
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut rows = Vec::with_capacity(usize::from(buffer.area.height));
    for y in 0..buffer.area.height {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            row.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}
