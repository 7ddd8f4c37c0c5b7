use super::*;
use crate::data::read_question_bank;
use crate::sound::{FeedbackSink, SoundEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Sumidero que graba los eventos emitidos, para afirmar sobre ellos.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<SoundEvent>>>);

impl Recorder {
    fn events(&self) -> Vec<SoundEvent> {
        self.0.borrow().clone()
    }
}

impl FeedbackSink for Recorder {
    fn emit(&self, event: SoundEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn app() -> GameApp {
    GameApp::with_sink(read_question_bank(), Box::new(Recorder::default()))
}

fn app_with_recorder() -> (GameApp, Recorder) {
    let recorder = Recorder::default();
    let app = GameApp::with_sink(read_question_bank(), Box::new(recorder.clone()));
    (app, recorder)
}

/// Coloca las fichas de la pregunta actual en el orden de autor,
/// buscando cada una en el pozo barajado.
fn place_authored_order(app: &mut GameApp) {
    let words = app.current_question().unwrap().words.clone();
    for word in &words {
        let idx = app
            .session
            .pool
            .iter()
            .position(|w| w == word)
            .expect("la ficha debe estar en el pozo");
        app.pick_word(idx);
    }
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn start_level_resets_session() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    assert_eq!(app.session.screen, Screen::Playing);
    assert_eq!(app.session.level_id, 1);
    assert_eq!(app.session.question_idx, 0);
    assert_eq!(app.session.score, 0);
    assert_eq!(app.session.feedback, Feedback::None);
    assert!(app.session.sentence.is_empty());
}

#[test]
fn start_level_with_invalid_id_is_a_no_op() {
    let mut app = app();
    app.start_level_with(9, &mut rng());
    assert_eq!(app.session.screen, Screen::Menu);
}

#[test]
fn load_question_fills_pool_with_a_permutation() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    let authored = app.current_question().unwrap().words.clone();
    assert!(app.session.sentence.is_empty());
    assert_eq!(sorted(app.session.pool.clone()), sorted(authored));
}

#[test]
fn pick_and_return_conserve_tiles() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    let total = app.session.pool.len();

    app.pick_word(0);
    assert_eq!(app.session.pool.len(), total - 1);
    assert_eq!(app.session.sentence.len(), 1);
    assert_eq!(app.session.pool.len() + app.session.sentence.len(), total);

    app.return_word(0);
    assert_eq!(app.session.pool.len(), total);
    assert!(app.session.sentence.is_empty());
}

#[test]
fn returned_tile_goes_to_the_end_of_the_pool() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    app.pick_word(0);
    let word = app.session.sentence[0].clone();
    app.return_word(0);
    assert_eq!(app.session.pool.last(), Some(&word));
}

#[test]
fn out_of_bounds_tile_ops_are_no_ops() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    let pool_before = app.session.pool.clone();

    app.pick_word(99);
    app.return_word(0); // frase vacía
    assert_eq!(app.session.pool, pool_before);
    assert!(app.session.sentence.is_empty());
}

#[test]
fn tile_ops_are_frozen_once_judged() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    place_authored_order(&mut app);
    app.check_answer();
    assert_eq!(app.session.feedback, Feedback::Correct);

    let sentence_before = app.session.sentence.clone();
    app.return_word(0);
    app.pick_word(0);
    assert_eq!(app.session.sentence, sentence_before);
    assert!(app.session.pool.is_empty());
}

#[test]
fn authored_order_is_correct_and_scores_ten() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    place_authored_order(&mut app);
    app.check_answer();

    assert_eq!(app.session.feedback, Feedback::Correct);
    assert_eq!(app.session.score, 10);
}

#[test]
fn wrong_order_gives_wrong_and_no_score() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    // Orden de autor invertido: nunca coincide con la frase canónica
    let mut words = app.current_question().unwrap().words.clone();
    words.reverse();
    for word in &words {
        let idx = app.session.pool.iter().position(|w| w == word).unwrap();
        app.pick_word(idx);
    }
    app.check_answer();

    assert_eq!(app.session.feedback, Feedback::Wrong);
    assert_eq!(app.session.score, 0);
}

#[test]
fn check_answer_is_idempotent() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    place_authored_order(&mut app);

    app.check_answer();
    app.check_answer();
    assert_eq!(app.session.feedback, Feedback::Correct);
    assert_eq!(app.session.score, 10);
}

#[test]
fn partial_sentence_is_judged_wrong() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    app.pick_word(0);
    app.check_answer();
    assert_eq!(app.session.feedback, Feedback::Wrong);
    assert_eq!(app.session.score, 0);
}

#[test]
fn advance_requires_a_correct_verdict() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    app.next_question_with(&mut rng());
    assert_eq!(app.session.question_idx, 0);

    app.pick_word(0);
    app.check_answer(); // frase parcial: Wrong
    app.next_question_with(&mut rng());
    assert_eq!(app.session.question_idx, 0);
    assert_eq!(app.session.screen, Screen::Playing);
}

#[test]
fn retry_reshuffles_the_same_question() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    app.pick_word(0);
    app.check_answer();
    assert_eq!(app.session.feedback, Feedback::Wrong);

    app.retry_question_with(&mut rng());
    assert_eq!(app.session.question_idx, 0);
    assert_eq!(app.session.feedback, Feedback::None);
    assert!(app.session.sentence.is_empty());

    let authored = app.current_question().unwrap().words.clone();
    assert_eq!(sorted(app.session.pool.clone()), sorted(authored));
}

#[test]
fn full_level_ends_finished_with_hundred() {
    let mut app = app();
    let mut rng = rng();
    app.start_level_with(1, &mut rng);

    for i in 0..10 {
        assert_eq!(app.session.question_idx, i);
        place_authored_order(&mut app);
        app.check_answer();
        assert_eq!(app.session.feedback, Feedback::Correct);
        app.next_question_with(&mut rng);
    }

    assert_eq!(app.session.screen, Screen::Finished);
    assert_eq!(app.session.score, 100);
    // Nunca un índice fuera de rango
    assert_eq!(app.session.question_idx, 9);
    assert_eq!(app.session.level_id, 1);
    assert!(app.is_perfect());
    assert!(app.can_advance_level());
}

#[test]
fn next_level_from_summary_starts_fresh() {
    let mut app = app();
    let mut rng = rng();
    app.start_level_with(1, &mut rng);
    for _ in 0..10 {
        place_authored_order(&mut app);
        app.check_answer();
        app.next_question_with(&mut rng);
    }
    assert_eq!(app.session.screen, Screen::Finished);

    app.start_level_with(2, &mut rng);
    assert_eq!(app.session.screen, Screen::Playing);
    assert_eq!(app.session.level_id, 2);
    assert_eq!(app.session.question_idx, 0);
    assert_eq!(app.session.score, 0);
}

#[test]
fn last_level_never_offers_an_advance() {
    let mut app = app();
    let mut rng = rng();
    app.start_level_with(3, &mut rng);
    for _ in 0..10 {
        place_authored_order(&mut app);
        app.check_answer();
        app.next_question_with(&mut rng);
    }
    assert_eq!(app.session.screen, Screen::Finished);
    assert_eq!(app.session.score, 100);
    assert!(!app.can_advance_level());
}

#[test]
fn sixty_points_gate_the_next_level() {
    let mut app = app();
    app.start_level_with(1, &mut rng());

    // El pase de nivel exige resumen, 60 puntos y un nivel posterior
    app.session.screen = Screen::Finished;
    app.session.score = 50;
    assert!(!app.can_advance_level());
    app.session.score = 60;
    assert!(app.can_advance_level());
}

#[test]
fn retries_do_not_double_score() {
    let mut app = app();
    let mut rng = rng();
    app.start_level_with(1, &mut rng);

    // Falla, mira la respuesta, reintenta y acierta: sigue valiendo 10
    for _ in 0..10 {
        app.pick_word(0);
        app.check_answer();
        if app.session.feedback == Feedback::Wrong {
            app.retry_question_with(&mut rng);
            place_authored_order(&mut app);
            app.check_answer();
        }
        assert_eq!(app.session.feedback, Feedback::Correct);
        app.next_question_with(&mut rng);
    }
    assert_eq!(app.session.screen, Screen::Finished);
    assert_eq!(app.session.score, 100);
}

#[test]
fn go_home_discards_the_run() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    app.go_home();
    assert_eq!(app.session.screen, Screen::Menu);

    app.start_level_with(2, &mut rng());
    assert_eq!(app.session.screen, Screen::Playing);
    assert_eq!(app.session.score, 0);
}

#[test]
fn transitions_emit_the_expected_events() {
    let (mut app, recorder) = app_with_recorder();
    let mut rng = rng();

    app.start_level_with(1, &mut rng);
    app.pick_word(0);
    app.return_word(0);
    place_authored_order(&mut app);
    app.check_answer();
    app.next_question_with(&mut rng);
    app.go_home();

    let events = recorder.events();
    assert_eq!(events[0], SoundEvent::LevelSelect);
    assert_eq!(events[1], SoundEvent::Pop);
    assert_eq!(events[2], SoundEvent::Pop);
    // tres Pop más al colocar la frase de autor
    assert_eq!(events[events.len() - 3], SoundEvent::Correct);
    assert_eq!(events[events.len() - 2], SoundEvent::Click);
    assert_eq!(events[events.len() - 1], SoundEvent::Click);
}

#[test]
fn finishing_a_level_emits_win() {
    let (mut app, recorder) = app_with_recorder();
    let mut rng = rng();
    app.start_level_with(1, &mut rng);
    for _ in 0..10 {
        place_authored_order(&mut app);
        app.check_answer();
        app.next_question_with(&mut rng);
    }
    assert_eq!(recorder.events().last(), Some(&SoundEvent::Win));
}

#[test]
fn muting_suppresses_emission() {
    let (mut app, recorder) = app_with_recorder();
    app.toggle_sound(); // apaga; el Click de apagado ya no suena
    assert!(recorder.events().is_empty());

    app.start_level_with(1, &mut rng());
    app.pick_word(0);
    app.check_answer();
    assert!(recorder.events().is_empty());

    // Al reactivar vuelve a sonar
    app.toggle_sound();
    assert_eq!(recorder.events(), vec![SoundEvent::Click]);
}

#[test]
fn session_view_mirrors_the_session() {
    let mut app = app();
    app.start_level_with(1, &mut rng());
    app.pick_word(0);

    let view = app.session_view().unwrap();
    assert_eq!(view.level_id, 1);
    assert_eq!(view.question_number, 1);
    assert_eq!(view.question_total, 10);
    assert_eq!(view.sentence, app.session.sentence);
    assert_eq!(view.pool, app.session.pool);
    assert_eq!(view.score, 0);
    assert!(view.progress_fraction() <= 1.0);
}

#[test]
fn level_cards_cover_the_bank() {
    let app = app();
    let cards = app.level_cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Tahap 1");
    assert!(cards.iter().all(|c| c.questions == 10));
}
