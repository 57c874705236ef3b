//! Integration tests for screen routing through `App::handle`

use oshi_vocab::core::{QuizPhase, Side, VocabularyStore};
use oshi_vocab::term::Viewport;
use oshi_vocab::types::{UiAction, GAME_OVER_DELAY_MS, MATCH_FEEDBACK_MS, TICK_MS};
use oshi_vocab::{App, Screen};

fn app() -> App {
    App::new(VocabularyStore::builtin(), 12345)
}

fn press(app: &mut App, actions: &[UiAction]) {
    for &a in actions {
        app.handle(a);
    }
}

/// Run the fixed-timestep clock for `ms`.
fn run_ticks(app: &mut App, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        app.tick(step);
        left -= step;
    }
}

fn open_game(app: &mut App, index: usize) {
    press(app, &[UiAction::Select]);
    assert_eq!(app.screen(), Screen::GameSelect);
    for _ in 0..index {
        app.handle(UiAction::Down);
    }
    app.handle(UiAction::Select);
}

#[test]
fn test_starts_on_home() {
    let app = app();
    assert_eq!(app.screen(), Screen::Home);
    assert!(!app.should_quit());
    let fb = app.render(Viewport::new(80, 24));
    assert!(fb.contains_text("Learn Oshikwanyama"));
}

#[test]
fn test_flashcards_by_category() {
    let mut app = app();
    open_game(&mut app, 0);
    assert_eq!(app.screen(), Screen::CategorySelect);

    let fb = app.render(Viewport::new(80, 30));
    assert!(fb.contains_text("All Words 108 words"));
    assert!(fb.contains_text("Greetings 8 words"));

    // Row 1 is the first real category.
    press(&mut app, &[UiAction::Down, UiAction::Select]);
    assert_eq!(app.screen(), Screen::Flashcards);
    assert_eq!(app.flashcards().category(), Some("greetings"));
    assert_eq!(app.flashcards().len(), 8);

    press(&mut app, &[UiAction::Select]);
    assert!(app.flashcards().revealed());
    press(&mut app, &[UiAction::Right]);
    assert_eq!(app.flashcards().position(), 1);
    assert!(!app.flashcards().revealed());

    press(&mut app, &[UiAction::MarkLearned]);
    assert_eq!(app.flashcards().learned_count(), 1);
    assert_eq!(app.flashcards().position(), 2);

    press(&mut app, &[UiAction::Back]);
    assert_eq!(app.screen(), Screen::CategorySelect);
    assert!(app.flashcards().is_empty());
}

#[test]
fn test_flashcard_restart_keeps_category() {
    let mut app = app();
    open_game(&mut app, 0);
    press(&mut app, &[UiAction::Down, UiAction::Down, UiAction::Select]);
    let category = app.flashcards().category().map(str::to_string);
    press(&mut app, &[UiAction::MarkLearned, UiAction::Restart]);
    assert_eq!(app.flashcards().category().map(str::to_string), category);
    assert_eq!(app.flashcards().learned_count(), 0);
}

#[test]
fn test_word_match_through_cursor() {
    let mut app = app();
    open_game(&mut app, 1);
    assert_eq!(app.screen(), Screen::Match);
    assert_eq!(app.word_match().pair_count(), 6);

    // Solve every pair by steering the cursor to the matching slots.
    for _ in 0..6 {
        let session = app.word_match();
        let (left_slot, source) = session
            .left_column()
            .iter()
            .enumerate()
            .find(|&(slot, _)| !session.is_slot_solved(Side::Left, slot))
            .map(|(slot, text)| (slot, text.to_string()))
            .unwrap();
        let target = session
            .pairs()
            .iter()
            .find(|p| p.source_text == source)
            .unwrap()
            .target_text
            .clone();
        let right_slot = session
            .right_column()
            .iter()
            .position(|t| *t == target)
            .unwrap();

        move_to(&mut app, Side::Left, left_slot);
        app.handle(UiAction::Select);
        move_to(&mut app, Side::Right, right_slot);
        app.handle(UiAction::Select);
        run_ticks(&mut app, MATCH_FEEDBACK_MS);
    }

    assert!(app.word_match().is_complete());
    assert_eq!(app.word_match().score(), 210);
    assert_eq!(app.word_match().accuracy(), 100);

    // Enter on the finished board deals a new one.
    app.handle(UiAction::Select);
    assert_eq!(app.word_match().score(), 0);
    assert_eq!(app.word_match().solved_count(), 0);
}

fn move_to(app: &mut App, side: Side, slot: usize) {
    app.handle(match side {
        Side::Left => UiAction::Left,
        Side::Right => UiAction::Right,
    });
    while app.match_cursor().slot > slot {
        app.handle(UiAction::Up);
    }
    while app.match_cursor().slot < slot {
        app.handle(UiAction::Down);
    }
    assert_eq!(app.match_cursor().side, side);
    assert_eq!(app.match_cursor().slot, slot);
}

#[test]
fn test_quiz_game_over_after_delay() {
    let mut app = app();
    open_game(&mut app, 2);
    assert_eq!(app.screen(), Screen::Quiz);
    assert_eq!(app.quiz().len(), 10);

    for _ in 0..3 {
        let wrong = (app.quiz().current().unwrap().correct_index + 1) % 4;
        app.handle(UiAction::Choose(wrong as u8));
        app.handle(UiAction::Next);
    }
    assert_eq!(app.quiz().lives(), 0);
    assert_eq!(app.quiz().phase(), QuizPhase::Playing);

    run_ticks(&mut app, GAME_OVER_DELAY_MS);
    assert_eq!(app.quiz().phase(), QuizPhase::GameOver);

    let fb = app.render(Viewport::new(80, 30));
    assert!(fb.contains_text("Game over"));

    // Enter restarts from a game-over screen.
    app.handle(UiAction::Select);
    assert_eq!(app.quiz().phase(), QuizPhase::Playing);
    assert_eq!(app.quiz().lives(), 3);
}

#[test]
fn test_quiz_perfect_run() {
    let mut app = app();
    open_game(&mut app, 2);
    for _ in 0..10 {
        let correct = app.quiz().current().unwrap().correct_index;
        app.handle(UiAction::Choose(correct as u8));
        app.handle(UiAction::Select);
    }
    assert_eq!(app.quiz().phase(), QuizPhase::Complete);
    assert_eq!(app.quiz().score(), 100);
}

#[test]
fn test_back_walks_up_the_tree() {
    let mut app = app();
    open_game(&mut app, 2);
    press(&mut app, &[UiAction::Back]);
    assert_eq!(app.screen(), Screen::GameSelect);
    press(&mut app, &[UiAction::Back]);
    assert_eq!(app.screen(), Screen::Home);
    // Back on the home screen is ignored.
    assert!(!app.handle(UiAction::Back));
}

#[test]
fn test_every_screen_renders() {
    let mut app = app();
    let vp = Viewport::new(100, 40);
    let _ = app.render(vp);
    press(&mut app, &[UiAction::Down, UiAction::Select]);
    assert!(app.render(vp).contains_text("History"));
    press(&mut app, &[UiAction::Back, UiAction::Up]);
    open_game(&mut app, 0);
    let _ = app.render(vp);
    press(&mut app, &[UiAction::Select]);
    assert!(app.render(vp).contains_text("All Words"));
}
