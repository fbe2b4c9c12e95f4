//! Integration test: drive the battle_sim binary end to end

use std::process::{Command, Output};

fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_battle_sim"))
        .args(args)
        .output()
        .expect("battle_sim should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_pack_command_is_seeded() {
    separator("pack --seed 42");
    let first = run(&["pack", "--pack", "hero", "--count", "2", "--seed", "42"]);
    let second = run(&["pack", "--pack", "hero", "--count", "2", "--seed", "42"]);
    assert!(first.status.success());

    let text = stdout(&first);
    println!("{}", text);
    assert!(text.starts_with("seed: 42"));
    assert!(text.contains("hero pack #1"));
    assert!(text.contains("hero pack #2"));
    assert_eq!(text, stdout(&second));
}

#[test]
fn test_unknown_pack_fails() {
    let output = run(&["pack", "--pack", "mythic", "--seed", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("mythic"));
}

#[test]
fn test_battle_command_narrates_to_the_end() {
    separator("battle --seed 7");
    let output = run(&["battle", "--seed", "7", "--wins", "2"]);
    assert!(output.status.success());

    let text = stdout(&output);
    println!("{}", text);
    assert!(text.contains("battle over:"));
    assert!(text.contains("result:"));
}

#[test]
fn test_battle_json_output() {
    let output = run(&["battle", "--seed", "3", "--no-events", "--json"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let json = text.split_once('\n').map(|(_, rest)| rest).unwrap_or_default();
    let actions: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
    assert!(!actions.is_empty());
    assert_eq!(actions.last().unwrap()["type"], "battle_end");
    assert!(actions.iter().all(|a| a["type"] != "field_event_note"));
}

#[test]
fn test_rates_command() {
    separator("rates --pack legend");
    let output = run(&["rates", "--pack", "legend", "--samples", "200", "--seed", "11"]);
    assert!(output.status.success());

    let text = stdout(&output);
    println!("{}", text);
    assert!(text.contains("legend packs opened: 200"));
    assert!(text.contains("average pack size: 5.00"));
    assert!(!text.contains("missing their guaranteed grade"));
}
