//! JSON round trips of the wire types (requires the `serde` feature).
#![cfg(feature = "serde")]

use minimax_chess::board::{Board, Color, Square};
use minimax_chess::engine::{Engine, EngineConfig, Reply, Request, Response};
use minimax_chess::Move;

#[test]
fn request_survives_json() {
    let requests = vec![
        Request::ApplyMove(Move::quiet(Square(6, 4), Square(4, 4))),
        Request::LegalMoves(Color::Black),
        Request::LoadKey(Board::new().hash()),
        Request::SetOption {
            name: "branch".to_string(),
            value: "12".to_string(),
        },
    ];
    for request in requests {
        let json = serde_json::to_string(&request).unwrap();
        let back: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}

#[test]
fn off_board_square_rejected_on_decode() {
    assert_eq!(serde_json::from_str::<Square>("[7,4]").unwrap(), Square(7, 4));
    assert!(serde_json::from_str::<Square>("[8,0]").is_err());
    assert!(serde_json::from_str::<Square>("[0,8]").is_err());

    let json = serde_json::to_string(&Request::ApplyMove(Move::quiet(
        Square(6, 4),
        Square(4, 4),
    )))
    .unwrap()
    .replace("[4,4]", "[4,12]");
    assert!(serde_json::from_str::<Request>(&json).is_err());
}

#[test]
fn responses_survive_json() {
    let mut engine = Engine::new(EngineConfig::default());
    for request in [Request::Grid, Request::LegalMoves(Color::White), Request::Hash] {
        let response = engine.handle(request);
        let json = serde_json::to_string(&response).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}

#[test]
fn error_response_survives_json() {
    let mut engine = Engine::new(EngineConfig::default());
    let response = engine.handle(Request::LoadGame("e2e5".to_string()));
    assert!(response.result.is_err());

    let json = serde_json::to_string(&response).unwrap();
    let back: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
    assert!(!matches!(back.result, Ok(Reply::Done)));
}
