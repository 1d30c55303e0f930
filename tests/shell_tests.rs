//! Shell integration tests.
//!
//! The shell is driven with scripted input and its output captured in
//! memory.

use rule_game::{GameConfig, GameOver, NumberRange, Outcome, Rule, Shell};

fn play(config: GameConfig, script: &str) -> (Outcome, String, Vec<Rule>, u32) {
    let mut shell = Shell::new(config, script.as_bytes(), Vec::new()).unwrap();
    let outcome = shell.run().unwrap();
    let rules = shell.session().rules().to_vec();
    let iteration = shell.iteration();
    let output = String::from_utf8(shell.into_output()).unwrap();
    (outcome, output, rules, iteration)
}

/// The first iteration runs before any menu; end of input quits.
#[test]
fn test_first_iteration_runs_immediately() {
    let (outcome, output, rules, iteration) = play(GameConfig::default(), "");

    assert_eq!(outcome, Outcome::Quit);
    assert!(rules.is_empty());
    assert_eq!(iteration, 2);
    assert!(output.contains("Iteration 1  |  Range: 1–10  |  Rules: 0"));
    for n in 1..=10 {
        assert!(output.contains(&format!("\n  {}\n", n)), "missing line for {}", n);
    }
    assert!(output.contains("Iteration 2"));
    assert!(output.contains("(no rules active)"));
}

/// Adding the predefined ban and running ends the game at 4.
#[test]
fn test_ban_ends_game() {
    let (outcome, output, rules, iteration) = play(GameConfig::default(), "1\n3\n5\n");

    assert_eq!(outcome, Outcome::GameOver(GameOver::Banned(4)));
    assert_eq!(rules, vec![Rule::ban(4)]);
    assert_eq!(iteration, 2);
    assert!(output.contains("✓ Rule added: [Ban 4]"));
    assert!(output.contains("Game Over ❌ — 4 is banned"));

    let last_run = output.rsplit("Rules active: 1").next().unwrap();
    assert!(last_run.contains("\n  3\n"));
    assert!(!last_run.contains("\n  5\n"));
}

/// A conflicting custom rule can be retried until it is accepted.
#[test]
fn test_custom_rule_retry() {
    let config = GameConfig::default().with_max_retries(2);
    let script = "1\n3\n2\n2\n4\nx\n5\nfive\n6\n";
    let (outcome, output, rules, _) = play(config, script);

    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(rules, vec![Rule::ban(4), Rule::replace(5, "five").unwrap()]);
    assert!(output.contains("⚠  Conflict detected: target is banned"));
    assert!(output.contains("Please define a different rule (attempt 2/2):"));
    assert!(output.contains("✓ Rule added: [Replace 5 → 'five']"));
    assert!(output.contains("Bye!"));
}

/// Running out of attempts returns to the menu without adding anything.
#[test]
fn test_custom_rule_max_retries() {
    let config = GameConfig::default().with_max_retries(1);
    let (outcome, output, rules, _) = play(config, "1\n5\n2\n5\n6\n");

    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(rules, vec![Rule::odd()]);
    assert!(output.contains("Conflict detected: duplicate rule"));
    assert!(output.contains("Max retries reached"));
}

/// Bad parameters are reported and the rule is asked for again.
#[test]
fn test_custom_rule_invalid_parameter() {
    let (_, output, rules, _) = play(GameConfig::default(), "2\n4\n1\nFizz\n3\nFizz\n6\n");

    assert_eq!(rules, vec![Rule::divisible(3, "Fizz").unwrap()]);
    assert!(output.contains("✗ invalid parameter: divisor must be at least 2"));
    assert!(output.contains("Please define a different rule (attempt 2/3):"));
    assert!(output.contains("✓ Rule added: [Divisible by 3 → 'Fizz']"));
}

/// Non-integer parameters use up attempts like any other rejection.
#[test]
fn test_custom_rule_invalid_parameter_max_retries() {
    let config = GameConfig::default().with_max_retries(2);
    let (outcome, output, rules, _) = play(config, "2\n3\nfour\n4.5\n6\n");

    assert_eq!(outcome, Outcome::Quit);
    assert!(rules.is_empty());
    assert_eq!(output.matches("✗ invalid parameter").count(), 2);
    assert!(output.contains("Max retries reached"));
}

/// An unknown pattern number goes straight back to the menu.
#[test]
fn test_custom_rule_invalid_pattern() {
    let (outcome, output, rules, _) = play(GameConfig::default(), "2\n9\n6\n");

    assert_eq!(outcome, Outcome::Quit);
    assert!(rules.is_empty());
    assert!(output.contains("✗ Invalid pattern."));
}

/// Range changes re-prompt until valid.
#[test]
fn test_change_range() {
    let script = "4\n9\n2\nabc\n5\n1\n3\n5\n";
    let mut shell = Shell::new(GameConfig::default(), script.as_bytes(), Vec::new()).unwrap();
    assert_eq!(shell.run().unwrap(), Outcome::Quit);
    assert_eq!(shell.session().range(), NumberRange::new(1, 3).unwrap());

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("✗ Start must not exceed End."));
    assert!(output.contains("Please enter a valid integer."));
    assert!(output.contains("✓ Range set to 1–3"));
    assert!(output.contains("Range 1–3 (3 numbers) | Rules active: 0"));
}

/// Removing rules, including from an empty list.
#[test]
fn test_remove_rule() {
    let (_, output, rules, _) = play(GameConfig::default(), "3\n1\nodd\n3\n7\n3\n1\n6\n");

    assert!(rules.is_empty());
    assert!(output.contains("No rules to remove."));
    assert!(output.contains("✗ no rule #7 (have 1)"));
    assert!(output.contains("✓ Removed: [Odd → 'odd']"));
}

/// Unknown menu entries are reported.
#[test]
fn test_invalid_menu_choice() {
    let (outcome, output, _, _) = play(GameConfig::default(), "9\nabc\n6\n");

    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("✗ Invalid choice."));
    assert!(output.contains("Please enter a valid integer."));
}

/// Challenge mode accepts correct answers.
#[test]
fn test_challenge_correct() {
    let config = GameConfig::default()
        .with_range(NumberRange::new(1, 3).unwrap())
        .with_challenge(true);
    let (outcome, output, _, iteration) = play(config, "1\n2\n3\n6\n");

    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(iteration, 2);
    assert!(output.contains("2: Your move? "));
    assert!(output.contains("All moves correct for this iteration."));
}

/// Challenge mode ends the game on the first wrong answer.
#[test]
fn test_challenge_wrong_answer() {
    let config = GameConfig::default()
        .with_range(NumberRange::new(1, 3).unwrap())
        .with_challenge(true);
    let (outcome, output, _, _) = play(config, "1\n3\n");

    assert_eq!(
        outcome,
        Outcome::GameOver(GameOver::WrongAnswer {
            number: 2,
            expected: "2".to_string(),
            given: "3".to_string(),
        })
    );
    assert!(output.contains("✗ Incorrect — expected: '2'. Game Over."));
    assert!(!output.contains("3: Your move?"));
}

/// Challenge answers must include tags.
#[test]
fn test_challenge_with_tags() {
    let config = GameConfig::default()
        .with_range(NumberRange::new(2, 3).unwrap())
        .with_challenge(true);
    // Iteration 1: no rules. Then add "odd" and answer iteration 2.
    let script = "2\n3\n1\nodd\n5\n2\n3 odd\n6\n";
    let (outcome, output, _, iteration) = play(config, script);

    assert_eq!(outcome, Outcome::Quit);
    assert_eq!(iteration, 3);
    assert_eq!(output.matches("All moves correct").count(), 2);
}

/// The widest possible range is announced and iterated without overflow.
#[test]
fn test_full_i64_range() {
    let config = GameConfig::default()
        .with_range(NumberRange::new(1, 1).unwrap())
        .with_challenge(true);
    let script = format!("1\n4\n{}\n{}\n5\nwrong\n", i64::MIN, i64::MAX);
    let (outcome, output, _, _) = play(config, &script);

    assert_eq!(
        outcome,
        Outcome::GameOver(GameOver::WrongAnswer {
            number: i64::MIN,
            expected: i64::MIN.to_string(),
            given: "wrong".to_string(),
        })
    );
    assert!(output.contains("(18446744073709551616 numbers)"));
}
