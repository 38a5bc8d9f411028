//! Interactive terminal client.
//!
//! Prompts for an action and a mark, then alternates between asking for
//! moves and polling the server until the game ends.

use crate::client::{ClientError, GameClient};
use crate::config::Settings;
use crate::service::Code;
use anyhow::{Result, bail};
use std::io::Write;
use tictactoe_core::{Cell, FIRST_CELL, GameId, GameSnapshot, LAST_CELL, Mark, Move, Square};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, instrument};

/// What the player wants to do at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start a new game.
    CreateGame,
    /// Join an existing game by ID.
    ConnectToGame,
}

/// Parses the startup menu answer (`1` or `2`).
pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim().parse::<u8>().ok()? {
        1 => Some(Action::CreateGame),
        2 => Some(Action::ConnectToGame),
        _ => None,
    }
}

/// Why a move entered at the prompt was refused locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CellInputError {
    /// Not a number.
    #[display("Please enter a number.")]
    NotANumber,
    /// Outside 1-9.
    #[display("Move must be in range [1,9].")]
    OutOfRange,
    /// Already played.
    #[display("This cell is already occupied.")]
    Occupied,
}

/// Parses a cell entered at the prompt against the current game.
pub fn parse_cell(input: &str, game: &GameSnapshot) -> Result<Cell, CellInputError> {
    let cell: Cell = input
        .trim()
        .parse()
        .map_err(|_| CellInputError::NotANumber)?;
    if !(FIRST_CELL..=LAST_CELL).contains(&cell) {
        Err(CellInputError::OutOfRange)
    } else if game.is_occupied(cell) {
        Err(CellInputError::Occupied)
    } else {
        Ok(cell)
    }
}

/// Renders the board of `game` as a box-drawn grid.
///
/// With `show_free`, empty cells show their number so the player
/// knows what to type.
pub fn render_grid(game: &GameSnapshot, show_free: bool) -> String {
    let board = game.board();
    let cells: Vec<String> = board
        .squares()
        .iter()
        .enumerate()
        .map(|(idx, square)| match square {
            Square::Occupied(mark) => mark.to_string(),
            Square::Empty if show_free => (idx + 1).to_string(),
            Square::Empty => " ".to_string(),
        })
        .collect();

    let row = |r: usize| {
        let [a, b, c] = [&cells[r * 3], &cells[r * 3 + 1], &cells[r * 3 + 2]];
        format!("│ {} │ {} │ {} │", a, b, c)
    };
    [
        "┌───┬───┬───┐".to_string(),
        row(0),
        "├───┼───┼───┤".to_string(),
        row(1),
        "├───┼───┼───┤".to_string(),
        row(2),
        "└───┴───┴───┘".to_string(),
    ]
    .join("\n")
}

/// Final message for `player` once the game is over.
pub fn outcome_message(game: &GameSnapshot, player: Mark) -> &'static str {
    match game.winner {
        None => "Draw.",
        Some(winner) if winner == player => "You won!",
        Some(_) => "You lose.",
    }
}

/// Line-oriented prompt over stdin.
struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => bail!("Input closed"),
        }
    }

    async fn action(&mut self) -> Result<Action> {
        loop {
            println!("Please, choose an option:");
            println!(" (1) create a new game");
            println!(" (2) connect to a game");
            if let Some(action) = parse_action(&self.ask("> ").await?) {
                return Ok(action);
            }
        }
    }

    async fn player(&mut self) -> Result<Mark> {
        loop {
            if let Some(mark) = Mark::from_symbol(&self.ask("Choose a player (X/O): ").await?) {
                return Ok(mark);
            }
        }
    }

    async fn game_id(&mut self) -> Result<GameId> {
        loop {
            if let Ok(id) = self.ask("Enter game ID to connect: ").await?.trim().parse() {
                return Ok(id);
            }
        }
    }

    async fn cell(&mut self, player: Mark, game: &GameSnapshot) -> Result<Cell> {
        loop {
            let answer = self.ask(&format!("Your move ({}): ", player)).await?;
            match parse_cell(&answer, game) {
                Ok(cell) => return Ok(cell),
                Err(e) => println!("{}", e),
            }
        }
    }
}

/// Runs an interactive session against the configured server.
#[instrument(skip(settings), fields(server_url = %settings.server_url()))]
pub async fn run(settings: &Settings) -> Result<()> {
    let client = GameClient::new(settings.server_url().clone());
    let mut prompter = Prompter::new();

    println!("Welcome to Tic-Tac-Toe!\n");

    let (game, player) = match prompter.action().await? {
        Action::CreateGame => {
            let player = prompter.player().await?;
            println!("Creating a new game...");
            (client.create_game().await?, player)
        }
        Action::ConnectToGame => {
            let game_id = prompter.game_id().await?;
            let player = prompter.player().await?;
            println!("Retrieving a game (ID={})...", game_id);
            match client.get_game(game_id).await {
                Ok(game) => (game, player),
                Err(e) if e.code() == Some(Code::NotFound) => {
                    println!("Error: game with ID={} is not found.", game_id);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    println!("Playing a game (ID={}) as player {}.\n", game.id, player);
    info!(game_id = game.id, %player, "Session started");
    play(&client, &mut prompter, game, player, settings).await
}

async fn play(
    client: &GameClient,
    prompter: &mut Prompter,
    mut game: GameSnapshot,
    player: Mark,
    settings: &Settings,
) -> Result<()> {
    while !game.is_finished {
        if game.is_turn_of(player) {
            println!("{}", render_grid(&game, true));
            let cell = prompter.cell(player, &game).await?;
            println!();
            game = submit_move(client, game.id, Move::new(player, cell)).await?;
        } else {
            println!("{}", render_grid(&game, false));
            println!("Waiting for the opponent's move...\n");
            game = wait_for_turn(client, game, player, settings).await?;
        }
    }

    println!("[ Game over ]");
    println!("{}", render_grid(&game, false));
    println!("{}", outcome_message(&game, player));
    Ok(())
}

/// Sends `mv` and returns the resulting game.
///
/// A move the server rejects is reported on stdout and answered with a
/// fresh copy of the game, so the session carries on. Transport
/// failures are returned as errors.
#[instrument(skip(client), fields(mark = %mv.mark, cell = mv.cell))]
pub async fn submit_move(client: &GameClient, game_id: GameId, mv: Move) -> Result<GameSnapshot> {
    match client.make_move(game_id, mv).await {
        Ok(game) => Ok(game),
        Err(ClientError::Rejected(status)) => {
            debug!(code = %status.code, "Move rejected");
            println!("Move rejected: {}", status.message);
            Ok(client.get_game(game_id).await?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Polls the server until it is `player`'s turn or the game ends.
///
/// Sleeps for the configured poll interval before each fetch.
pub async fn wait_for_turn(
    client: &GameClient,
    mut game: GameSnapshot,
    player: Mark,
    settings: &Settings,
) -> Result<GameSnapshot> {
    let mut polls = 0u64;
    while !game.is_finished && !game.is_turn_of(player) {
        tokio::time::sleep(settings.poll_interval()).await;
        game = client.get_game(game.id).await?;
        polls += 1;
        if polls % 10 == 0 {
            debug!(polls, "Still waiting for opponent");
        }
    }
    Ok(game)
}
