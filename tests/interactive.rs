//! Interactive games against a scripted human on in-memory streams

use std::io::Cursor;

use qttt::{
    StateKey,
    adapters::{
        HumanOpponent, InMemoryRepository, RandomOpponent,
        human_opponent::{INVALID_INPUT, INVALID_POSITION},
    },
    app::AgentConfig,
    pipeline::{InteractiveSession, Opponent, TrainingConfig, TrainingPipeline},
    q_learning::{QLearningAgent, QTable},
    tictactoe::{Cell, Game, GameOutcome, Player},
};

fn greedy(player: Player, table: QTable) -> QLearningAgent {
    QLearningAgent::new(player, &AgentConfig::new().with_epsilon(0.0).with_seed(0))
        .unwrap()
        .with_table(table)
}

fn human(input: &str) -> HumanOpponent<Cursor<Vec<u8>>, Vec<u8>> {
    HumanOpponent::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_human_can_beat_agent_playing_o() {
    // O opens in the centre, then plays 8 and 5; the human takes the top row.
    let mut table = QTable::new();
    table.set(StateKey::empty(), 4, 1.0);
    table.set(StateKey::parse("X...O....").unwrap(), 8, 1.0);
    table.set(StateKey::parse("XX..O...O").unwrap(), 5, 1.0);
    let mut agent = greedy(Player::O, table.clone());
    let mut human = human("4\nfoo\n0\n1\n2\n");

    let mut session = InteractiveSession::new(Vec::new());
    let outcome = session.play(&mut agent, &mut human).unwrap();

    assert_eq!(outcome, GameOutcome::Win(Player::X));
    assert_eq!(agent.q_table(), &table);

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.starts_with("AI plays: 4\nAI plays: 8\nAI plays: 5\n"));
    assert!(output.ends_with("Game over!\nWinner: X\n"));

    let (_, prompts) = human.into_inner();
    let prompts = String::from_utf8(prompts).unwrap();
    assert_eq!(prompts.matches(INVALID_INPUT).count(), 1);
    assert_eq!(prompts.matches(INVALID_POSITION).count(), 1);
}

#[test]
fn test_agent_win_is_announced() {
    let mut table = QTable::new();
    table.set(StateKey::parse(".........").unwrap(), 0, 1.0);
    table.set(StateKey::parse("X..O.....").unwrap(), 1, 1.0);
    table.set(StateKey::parse("XX.OO....").unwrap(), 2, 1.0);
    let mut agent = greedy(Player::X, table);
    let mut human = human("3\n4\n");

    let mut session = InteractiveSession::new(Vec::new());
    let outcome = session.play(&mut agent, &mut human).unwrap();

    assert_eq!(outcome, GameOutcome::Win(Player::X));
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.starts_with("AI plays: 0\n"));
    assert!(output.ends_with("Winner: X\n"));
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let mut agent = greedy(Player::O, QTable::new());
    let mut human = human("");

    let result = InteractiveSession::new(Vec::new()).play(&mut agent, &mut human);

    assert!(matches!(result, Err(qttt::Error::InputClosed)));
}

/// Plays like a random opponent and remembers the agent's reply positions.
struct Recording {
    inner: RandomOpponent,
    agent_to_move: Vec<StateKey>,
}

impl Opponent for Recording {
    fn select_move(&mut self, game: &Game) -> qttt::Result<usize> {
        let position = self.inner.select_move(game)?;
        let mut next = game.clone();
        next.make_move(position, Player::X);
        if !next.is_over() {
            self.agent_to_move.push(next.state_key());
        }
        Ok(position)
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

fn has_equal_marks(state: &StateKey) -> bool {
    let board = state.to_board().unwrap();
    let count = |cell| (0..9).filter(|&p| board.get(p) == cell).count();
    count(Cell::X) == count(Cell::O)
}

#[test]
fn test_o_agent_plays_positions_it_trained_on() {
    let mut agent =
        QLearningAgent::new(Player::O, &AgentConfig::new().with_seed(21)).unwrap();
    let mut trainer = RandomOpponent::with_seed("Random".to_string(), 22);
    TrainingPipeline::new(TrainingConfig {
        num_games: 300,
        ..TrainingConfig::default()
    })
    .run(&mut agent, &mut trainer, &InMemoryRepository::new())
    .unwrap();
    assert!(agent.q_table().iter().all(|(key, _)| has_equal_marks(&key.state)));

    for seed in 0..10 {
        let mut human = Recording {
            inner: RandomOpponent::with_seed("Random".to_string(), seed),
            agent_to_move: Vec::new(),
        };
        let mut session = InteractiveSession::new(Vec::new());
        session.play(&mut agent, &mut human).unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.starts_with("AI plays: "));
        assert!(human.agent_to_move.iter().all(has_equal_marks));
    }
}
