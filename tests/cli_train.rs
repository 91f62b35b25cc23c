//! The train command wired end to end through its clap arguments

use clap::Parser;
use qttt::{
    adapters::JsonFileRepository,
    cli::commands::train::{TrainArgs, train},
    pipeline::TrainingResult,
    ports::QTableRepository,
};
use tempfile::TempDir;

#[test]
fn test_train_command_writes_table_and_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table = temp_dir.path().join("qtable.json");
    let summary = temp_dir.path().join("summary.json");

    let args = TrainArgs::parse_from([
        "train",
        "--episodes",
        "25",
        "--no-progress",
        "--seed",
        "17",
        "--metrics-window",
        "10",
        "--table",
        table.to_str().unwrap(),
        "--summary",
        summary.to_str().unwrap(),
    ]);
    let (agent, result) = train(&args).unwrap();

    assert_eq!(result.total_games, 25);
    assert_eq!(&JsonFileRepository::new(&table).load(), agent.q_table());

    let written: TrainingResult =
        serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(written.total_games, 25);
    assert_eq!(written.wins, result.wins);
    assert_eq!(written.q_table_size, result.q_table_size);
}

#[test]
fn test_second_run_continues_from_saved_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table = temp_dir.path().join("qtable.json");
    let args = |seed: &str| {
        TrainArgs::parse_from([
            "train",
            "-e",
            "20",
            "--no-progress",
            "--seed",
            seed,
            "-t",
            table.to_str().unwrap(),
        ])
    };

    let (first, _) = train(&args("1")).unwrap();
    let (second, _) = train(&args("2")).unwrap();

    // Every value learned in the first run is either kept or refined.
    for (key, _) in first.q_table().iter() {
        assert!(second.q_table().contains(&key.state, key.action));
    }
    assert!(second.q_table().size() >= first.q_table().size());
}

#[test]
fn test_invalid_hyperparameters_fail_before_training() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table = temp_dir.path().join("qtable.json");
    let args = TrainArgs::parse_from([
        "train",
        "--no-progress",
        "--alpha",
        "2",
        "--table",
        table.to_str().unwrap(),
    ]);

    assert!(train(&args).is_err());
    assert!(!table.exists());
}
