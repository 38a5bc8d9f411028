//! Tests for the HTTP client against a live server.

use std::time::Duration;
use tictactoe_server::{
    ClientError, Code, GameClient, GameService, Mark, Move, Settings, rest, terminal,
};
use tokio::time::timeout;

async fn spawn_server() -> GameClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, rest::router(GameService::new()))
            .await
            .unwrap();
    });
    GameClient::new(format!("http://{}/", addr))
}

#[tokio::test]
async fn test_two_clients_play_one_game() {
    let cross = spawn_server().await;
    let nought = GameClient::new(cross.base_url());

    let game = cross.create_game().await.unwrap();
    let joined = nought.get_game(game.id).await.unwrap();
    assert_eq!(joined, game);

    cross.make_move(game.id, Move::new(Mark::Cross, 5)).await.unwrap();
    let seen = nought.get_game(game.id).await.unwrap();
    assert!(seen.is_turn_of(Mark::Nought));

    let after = nought
        .make_move(game.id, Move::new(Mark::Nought, 1))
        .await
        .unwrap();
    assert_eq!(after.moves.len(), 2);
    assert_eq!(after.turn, Mark::Cross);
}

#[tokio::test]
async fn test_rejections_decode_to_codes() {
    let client = spawn_server().await;

    let err = client.get_game(99).await.unwrap_err();
    assert_eq!(err.code(), Some(Code::NotFound));

    let game = client.create_game().await.unwrap();
    let err = client
        .make_move(game.id, Move::new(Mark::Cross, 10))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));

    let err = client
        .make_move(game.id, Move::new(Mark::Nought, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::FailedPrecondition));
}

#[tokio::test]
async fn test_wait_for_turn_returns_after_opponent_moves() {
    let nought = spawn_server().await;
    let cross = GameClient::new(nought.base_url());
    let settings = Settings::default().with_poll_interval_ms(Some(10));

    let game = cross.create_game().await.unwrap();
    let opponent = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cross.make_move(game.id, Move::new(Mark::Cross, 5)).await.unwrap();
    });

    let ready = timeout(
        Duration::from_secs(5),
        terminal::wait_for_turn(&nought, game.clone(), Mark::Nought, &settings),
    )
    .await
    .expect("turn arrives before timeout")
    .unwrap();
    opponent.await.unwrap();

    assert!(ready.is_turn_of(Mark::Nought));
    assert_eq!(ready.moves, vec![Move::new(Mark::Cross, 5)]);
}

#[tokio::test]
async fn test_wait_for_turn_returns_when_game_already_playable() {
    let client = spawn_server().await;
    let settings = Settings::default().with_poll_interval_ms(Some(10));

    let game = client.create_game().await.unwrap();
    let ready = terminal::wait_for_turn(&client, game.clone(), Mark::Cross, &settings)
        .await
        .unwrap();
    assert_eq!(ready, game);
}

#[tokio::test]
async fn test_submit_move_refetches_after_rejection() {
    let client = spawn_server().await;
    let game = client.create_game().await.unwrap();

    let accepted = terminal::submit_move(&client, game.id, Move::new(Mark::Cross, 1))
        .await
        .unwrap();
    assert_eq!(accepted.moves.len(), 1);

    let refreshed = terminal::submit_move(&client, game.id, Move::new(Mark::Cross, 2))
        .await
        .unwrap();
    assert_eq!(refreshed, accepted);
    assert!(refreshed.is_turn_of(Mark::Nought));
}

#[tokio::test]
async fn test_submit_move_refetch_surfaces_missing_game() {
    let client = spawn_server().await;
    let err = terminal::submit_move(&client, 42, Move::new(Mark::Cross, 1))
        .await
        .unwrap_err();
    let client_err = err.downcast_ref::<ClientError>().expect("client error");
    assert_eq!(client_err.code(), Some(Code::NotFound));
}
