#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello::wasm::OthelloGame;
use othello::wasm_ready;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(obj: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(obj.clone(), |value, key| {
        Reflect::get(&value, &JsValue::from_str(key)).unwrap()
    })
}

#[wasm_bindgen_test]
fn state_exposes_read_model() {
    assert!(wasm_ready());
    let game = OthelloGame::new();
    let state = game.state().unwrap();

    assert_eq!(field(&state, &["currentPlayer"]).as_string().unwrap(), "black");
    assert_eq!(field(&state, &["scores", "black"]).as_f64(), Some(2.0));
    assert_eq!(field(&state, &["scores", "white"]).as_f64(), Some(2.0));
    assert_eq!(field(&state, &["opponentEnabled"]).as_bool(), Some(false));
    assert!(game.is_human_turn());
}

#[wasm_bindgen_test]
fn illegal_move_surfaces_as_error() {
    let mut game = OthelloGame::new();

    assert!(game.make_move(0, 0).is_err());
    assert!(game.make_move(2, 3).is_ok());
    assert!(game.result().unwrap().is_null());
}

#[wasm_bindgen_test]
fn computer_opens_when_human_takes_white() {
    let mut game = OthelloGame::new();
    game.toggle_opponent();

    game.choose_human_side(JsValue::from_str("white")).unwrap();
    assert!(!game.is_human_turn());
    game.play_automated().unwrap();
    let state = game.state().unwrap();

    assert_eq!(field(&state, &["currentPlayer"]).as_string().unwrap(), "white");
    assert_eq!(field(&state, &["humanPlayer"]).as_string().unwrap(), "white");
    assert_eq!(field(&state, &["scores", "black"]).as_f64(), Some(4.0));
    assert!(game.is_human_turn());
}

#[wasm_bindgen_test]
fn config_object_is_accepted() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &"opponentEnabled".into(), &JsValue::TRUE).unwrap();

    let mut game = OthelloGame::with_config(config.into()).unwrap();
    game.make_move(2, 3).unwrap();

    assert!(game.is_human_turn());
    assert!(!game.is_legal_move(2, 2));
}
