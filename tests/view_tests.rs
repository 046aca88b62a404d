use crossterm::event::{KeyCode, KeyEvent};
use day_planner_tui::app::{handle_key, AppState, Overlay};
use day_planner_tui::model::SectionKind;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn draw(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| day_planner_tui::view::render(state, frame))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol())
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[test]
fn day_view_shows_all_section_headers() {
    let screen = draw(&AppState::new(), 80, 30);
    assert!(screen.contains("Events"));
    assert!(screen.contains("Tasks"));
    assert!(screen.contains("Habits"));
}

#[test]
fn day_view_shows_demo_rows_and_times() {
    let screen = draw(&AppState::new(), 80, 30);
    assert!(screen.contains("Morning run"));
    assert!(screen.contains("7:00 AM"));
    assert!(screen.contains("Pick up groceries"));
    assert!(screen.contains("Read 20 pages"));
}

#[test]
fn day_view_shows_fixed_date() {
    let screen = draw(&AppState::new(), 80, 30);
    assert!(screen.contains("Friday, June 14 2024"));
}

#[test]
fn sections_appear_in_fixed_order() {
    let screen = draw(&AppState::new(), 80, 30);
    let events = screen.find("Events").unwrap();
    let tasks = screen.find("Tasks").unwrap();
    let habits = screen.find("Habits").unwrap();
    assert!(events < tasks && tasks < habits);
}

#[test]
fn empty_store_shows_hints() {
    let screen = draw(&AppState::empty(), 80, 30);
    assert!(screen.contains("Nothing scheduled"));
    assert!(screen.contains("No tasks"));
    assert!(screen.contains("No habits"));
}

#[test]
fn add_modal_renders_two_choices() {
    let mut state = AppState::new();
    state.overlay = Overlay::AddItem;
    let screen = draw(&state, 80, 30);
    assert!(screen.contains("Add new item"));
    assert!(screen.contains("Task"));
    assert!(screen.contains("Habit"));
}

#[test]
fn confirm_delete_names_the_row() {
    let mut state = AppState::new();
    let task = state.store.section(SectionKind::Tasks).rows[0].id;
    state.overlay = Overlay::ConfirmDelete(task);
    let screen = draw(&state, 80, 30);
    assert!(screen.contains("Delete Pick up groceries?"));
}

#[test]
fn help_overlay_renders() {
    let mut state = AppState::new();
    state.overlay = Overlay::Help;
    let screen = draw(&state, 80, 30);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Finish editing"));
}

#[test]
fn editing_row_renders_typed_text() {
    let mut state = AppState::new();
    for code in [KeyCode::Char('a'), KeyCode::Char('t')] {
        handle_key(&mut state, KeyEvent::from(code));
    }
    for c in "Water plants".chars() {
        handle_key(&mut state, KeyEvent::from(KeyCode::Char(c)));
    }

    let screen = draw(&state, 80, 30);
    assert!(screen.contains("Water plants█"));
    assert!(screen.contains("EDITING"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut state = AppState::new();
    draw(&state, 10, 4);
    state.overlay = Overlay::AddItem;
    draw(&state, 10, 4);
    state.overlay = Overlay::Help;
    draw(&state, 10, 4);
}

fn crowd_tasks(state: &mut AppState, count: usize) {
    for _ in 0..count {
        let id = state.store.add_task();
        state.store.set_title(id, "filler");
        state.store.toggle_edit(id);
    }
}

#[test]
fn selected_row_stays_visible_in_crowded_section() {
    let mut state = AppState::new();
    crowd_tasks(&mut state, 20);
    let last = state.store.section(SectionKind::Tasks).rows.last().unwrap().id;
    state.selected = Some(last);

    let screen = draw(&state, 80, 24);
    assert!(screen.contains("Reply to landlord"));
}

#[test]
fn jumping_to_the_end_keeps_cursor_on_screen() {
    let mut state = AppState::new();
    crowd_tasks(&mut state, 20);
    handle_key(&mut state, KeyEvent::from(KeyCode::Char('G')));

    let screen = draw(&state, 80, 24);
    assert!(screen.contains("Read 20 pages"));
    assert!(screen.contains("Habits"));
}

#[test]
fn walking_down_a_crowded_section_always_shows_the_cursor() {
    let mut state = AppState::new();
    crowd_tasks(&mut state, 20);

    for _ in 0..state.store.row_count() {
        let screen = draw(&state, 80, 24);
        assert!(screen.contains('▸'), "cursor hidden at {:?}", state.selected);
        handle_key(&mut state, KeyEvent::from(KeyCode::Char('j')));
    }
}
