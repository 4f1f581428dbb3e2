use color_recall::engine::Session;
use color_recall::store::MemoryStore;
use color_recall::term::{GameView, Screen, Viewport};
use color_recall::types::{Difficulty, GameMode};

#[test]
fn term_view_draws_grid_border_for_grid_size() {
    let mut session = Session::new(MemoryStore::new(), 1);
    session.start(GameMode::Normal, Some(Difficulty::Medium));

    // 3x3 grid of 6x3 cells plus border => 20x11, tray to the right.
    let view = GameView::default();
    let fb = view.render(&session, &Screen::game(), Viewport::new(44, 20));
    let frame_w = 3 * 6 + 2;
    let start_x = (44 - (frame_w + 2 + 22)) / 2;

    assert_eq!(fb.get(start_x, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(start_x + frame_w - 1, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(start_x, 3 + 10).unwrap().ch, '└');
    assert_eq!(fb.get(start_x + frame_w - 1, 3 + 10).unwrap().ch, '┘');
}

#[test]
fn term_view_paints_layout_colors_while_memorizing() {
    let mut session = Session::new(MemoryStore::new(), 1);
    session.start(GameMode::Normal, Some(Difficulty::Easy));
    let first = session.state().original_layout()[0].color;

    let fb = GameView::default().render(&session, &Screen::game(), Viewport::new(60, 20));
    let start_x = (60 - (2 * 6 + 2 + 2 + 22)) / 2;
    let cell = fb.get(start_x + 1, 4).unwrap();
    let (r, g, b) = first.rgb();
    assert_eq!((cell.style.bg.r, cell.style.bg.g, cell.style.bg.b), (r, g, b));
}
