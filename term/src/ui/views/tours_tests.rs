use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};
use std::rc::Rc;

use crate::{
    store::{Dispatcher, MockDispatcher},
    test_utils::{buffer_lines, make_tour, make_tours},
    ui::components::card::{NOT_INTERESTED, READ_MORE, SHOW_LESS},
};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn state_with_tours(count: usize) -> State {
    let mut state = State::default();
    state.tours = make_tours(count);
    state
}

fn render(
    view: &ToursView,
    state: &State,
    width: u16,
    height: u16,
) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext { state };

            view.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    buffer_lines(terminal.backend().buffer())
}

fn press(
    view: &ToursView,
    state: &State,
    dispatcher: Rc<dyn Dispatcher>,
    code: KeyCode,
) -> bool {
    let ctx = CustomEventContext { state, dispatcher };
    view.process_event(&key(code), &ctx).unwrap()
}

fn no_dispatch() -> Rc<dyn Dispatcher> {
    let mut dispatcher = MockDispatcher::new();
    dispatcher.expect_dispatch().never();
    Rc::new(dispatcher)
}

fn expect_dispatch(action: Action) -> Rc<dyn Dispatcher> {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(move |a| *a == action)
        .return_const(())
        .times(1);
    Rc::new(dispatcher)
}

fn contains(lines: &[String], text: &str) -> bool {
    lines.iter().any(|l| l.contains(text))
}

#[test]
fn test_renders_only_loading_indicator_while_loading() {
    let view = ToursView::new();
    let mut state = state_with_tours(2);
    state.in_flight = Some(1);

    let lines = render(&view, &state, 80, 12);

    assert!(contains(&lines, LOADING_TEXT));
    assert!(!contains(&lines, "Tour 1"));
    assert!(!contains(&lines, NOT_INTERESTED));
}

#[test]
fn test_renders_empty_state_with_refresh_control() {
    let view = ToursView::new();
    let state = State::default();

    let lines = render(&view, &state, 80, 12);

    assert!(contains(&lines, EMPTY_TEXT));
    assert!(contains(&lines, REFRESH_TEXT));
    assert!(!contains(&lines, LOADING_TEXT));
}

#[test]
fn test_renders_one_card_per_tour_in_order() {
    let view = ToursView::new();
    let state = state_with_tours(3);

    let lines = render(&view, &state, 120, 12);

    let first = lines[0].find("Tour 1").unwrap();
    let second = lines[0].find("Tour 2").unwrap();
    let third = lines[0].find("Tour 3").unwrap();

    assert!(first < second && second < third);
    assert_eq!(
        lines.iter().filter(|l| l.contains(NOT_INTERESTED)).count(),
        1
    );
    assert_eq!(lines[7].matches(NOT_INTERESTED).count(), 3);
}

#[test]
fn test_narrow_terminal_stacks_cards() {
    let view = ToursView::new();
    let state = state_with_tours(3);

    let lines = render(&view, &state, 40, 27);

    let row_of = |name: &str| lines.iter().position(|l| l.contains(name));

    assert_eq!(row_of("Tour 1"), Some(0));
    assert_eq!(row_of("Tour 2"), Some(9));
    assert_eq!(row_of("Tour 3"), Some(18));
}

#[test]
fn test_not_interested_removes_selected_tour() {
    let view = ToursView::new();
    let state = state_with_tours(3);

    let handled = press(
        &view,
        &state,
        expect_dispatch(Action::RemoveTour(TourId::new("1"))),
        KeyCode::Char('x'),
    );

    assert!(handled);
}

#[test]
fn test_delete_key_removes_tour_under_moved_selection() {
    let view = ToursView::new();
    let state = state_with_tours(3);

    assert!(press(&view, &state, no_dispatch(), KeyCode::Right));
    assert!(press(
        &view,
        &state,
        expect_dispatch(Action::RemoveTour(TourId::new("2"))),
        KeyCode::Delete,
    ));
}

#[test]
fn test_selection_stays_in_bounds() {
    let view = ToursView::new();
    let state = state_with_tours(2);

    press(&view, &state, no_dispatch(), KeyCode::Left);
    press(&view, &state, no_dispatch(), KeyCode::Up);
    press(&view, &state, no_dispatch(), KeyCode::Char('l'));
    press(&view, &state, no_dispatch(), KeyCode::Char('l'));
    press(&view, &state, no_dispatch(), KeyCode::Down);

    press(
        &view,
        &state,
        expect_dispatch(Action::RemoveTour(TourId::new("2"))),
        KeyCode::Char('x'),
    );
}

#[test]
fn test_selection_clamps_after_list_shrinks() {
    let view = ToursView::new();
    let state = state_with_tours(2);
    press(&view, &state, no_dispatch(), KeyCode::Right);

    // second tour was dismissed elsewhere
    let mut shrunk = state.clone();
    shrunk.tours.truncate(1);

    press(
        &view,
        &shrunk,
        expect_dispatch(Action::RemoveTour(TourId::new("1"))),
        KeyCode::Char('x'),
    );
}

#[test]
fn test_enter_toggles_read_more() {
    let view = ToursView::new();
    let state = state_with_tours(1);

    assert!(contains(&render(&view, &state, 40, 9), READ_MORE));

    assert!(press(&view, &state, no_dispatch(), KeyCode::Enter));
    let lines = render(&view, &state, 40, 9);
    assert!(contains(&lines, SHOW_LESS));
    assert!(!contains(&lines, READ_MORE));

    assert!(press(&view, &state, no_dispatch(), KeyCode::Char(' ')));
    assert!(contains(&render(&view, &state, 40, 9), READ_MORE));
}

#[test]
fn test_expanded_cards_collapse_when_new_list_arrives() {
    let view = ToursView::new();
    let state = state_with_tours(1);

    press(&view, &state, no_dispatch(), KeyCode::Enter);
    assert!(contains(&render(&view, &state, 40, 9), SHOW_LESS));

    let mut refreshed = state.clone();
    refreshed.version += 1;

    assert!(contains(&render(&view, &refreshed, 40, 9), READ_MORE));
}

#[test]
fn test_expanded_long_card_keeps_show_less_and_removal_visible() {
    let view = ToursView::new();
    let mut state = State::default();
    state.tours = vec![
        make_tour(
            "1",
            "Paris",
            &"Paris is synonymous with the finest things. ".repeat(14),
        ),
        make_tour("2", "Rome", "short info"),
    ];

    press(&view, &state, no_dispatch(), KeyCode::Enter);
    let lines = render(&view, &state, 78, 18);

    // the expanded card is taller than the area and gets cut at the bottom
    assert!(lines[0].starts_with("┏ Paris ━"));
    assert!(lines[17].starts_with("┗"));
    assert!(contains(&lines, SHOW_LESS));
    assert_eq!(lines[16].matches(NOT_INTERESTED).count(), 2);
}

#[test]
fn test_single_card_uses_full_width() {
    let view = ToursView::new();
    let state = state_with_tours(1);

    let lines = render(&view, &state, 78, 9);

    assert!(lines[0].starts_with("┏ Tour 1 ━"));
    assert!(lines[0].ends_with("┓"));
}

#[test]
fn test_grid_scrolls_to_keep_selection_visible() {
    let view = ToursView::new();
    let state = state_with_tours(3);

    assert!(contains(&render(&view, &state, 40, 9), "Tour 1"));

    press(&view, &state, no_dispatch(), KeyCode::Down);
    press(&view, &state, no_dispatch(), KeyCode::Char('j'));

    let lines = render(&view, &state, 40, 9);
    assert!(contains(&lines, "Tour 3"));
    assert!(!contains(&lines, "Tour 1"));
}

#[test]
fn test_refresh_key_in_empty_state() {
    let view = ToursView::new();
    let state = State::default();

    let handled = press(
        &view,
        &state,
        expect_dispatch(Action::RefreshTours),
        KeyCode::Char('r'),
    );

    assert!(handled);
}

#[test]
fn test_refresh_key_ignored_while_tours_shown() {
    let view = ToursView::new();
    let state = state_with_tours(2);

    assert!(!press(&view, &state, no_dispatch(), KeyCode::Char('r')));
}

#[test]
fn test_keys_ignored_while_loading() {
    let view = ToursView::new();
    let mut state = state_with_tours(2);
    state.in_flight = Some(3);

    assert!(!press(&view, &state, no_dispatch(), KeyCode::Char('x')));
    assert!(!press(&view, &state, no_dispatch(), KeyCode::Char('r')));
}

#[test]
fn test_unhandled_keys_fall_through() {
    let view = ToursView::new();
    let state = state_with_tours(2);

    assert!(!press(&view, &state, no_dispatch(), KeyCode::Char('q')));
}

#[test]
fn test_legend_follows_view_state() {
    let view = ToursView::new();

    let mut loading = State::default();
    loading.in_flight = Some(1);

    assert_eq!(view.legend(&loading), LOADING_LEGEND);
    assert_eq!(view.legend(&State::default()), EMPTY_LEGEND);
    assert_eq!(view.legend(&state_with_tours(1)), TOURS_LEGEND);
}
