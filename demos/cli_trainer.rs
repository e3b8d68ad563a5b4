//! CLI blackjack trainer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcoach::{Card, DealerHand, Feedback, Phase, Recommendation, Table, TableOptions, Tally};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed, Tally::new());

    loop {
        match prompt_line("\n[n]ew round or [q]uit: ").as_str() {
            "q" | "quit" => break,
            "n" | "new" | "" => {}
            _ => {
                println!("Unknown command.");
                continue;
            }
        }

        if let Err(err) = table.start() {
            println!("Start error: {err}");
            continue;
        }

        while table.phase() == Phase::PlayerTurn {
            print_table(&table);

            let action = prompt_line("[h]it [s]tand [d]raw? / [x] stop? (quiz): ");
            match action.as_str() {
                "h" | "hit" => {
                    if let Err(err) = table.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = table.stand() {
                        println!("Action error: {err}");
                    }
                }
                "d" => grade(&mut table, Recommendation::Draw),
                "x" => grade(&mut table, Recommendation::Stop),
                "q" | "quit" => {
                    print_stats(table.stats());
                    return;
                }
                _ => println!("Unknown action."),
            }
        }

        if let Some(result) = table.result().copied() {
            print_table(&table);
            let mark = match result.outcome.feedback() {
                Feedback::Success => colorize("+", "32"),
                Feedback::Warning => colorize("=", "33"),
                Feedback::Error => colorize("x", "31"),
            };
            println!(
                "{mark} {} (you {}, dealer {})",
                result.outcome.message(),
                result.player_value,
                result.dealer_value
            );
        }
    }

    print_stats(table.stats());
}

fn grade(table: &mut Table<Tally>, choice: Recommendation) {
    match table.submit_quiz_answer(choice) {
        Ok(true) => println!("Correct."),
        Ok(false) => {
            if let Some(advice) = table.advice() {
                println!("Not quite. {}", advice.rationale);
            }
        }
        Err(err) => println!("Quiz error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table<Tally>) {
    let dealer = table.dealer();
    let dealer_value = if dealer.is_hole_revealed() {
        dealer.value().to_string()
    } else {
        String::from("?")
    };
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer));

    let player = table.player();
    println!(
        "You:    {} (value {})",
        format_cards(player.cards()),
        player.value()
    );

    if let Some(odds) = table.bust_probability() {
        println!(
            "Bust risk: {odds} (from the remaining {} cards)",
            table.remaining()
        );
    }
    if let Some(commentary) = table.commentary() {
        println!("{commentary}");
    }
}

fn print_stats(stats: &Tally) {
    println!(
        "\nRounds {} | wins {} | losses {} | pushes {}",
        stats.rounds, stats.wins, stats.losses, stats.pushes
    );
    if let Some(accuracy) = stats.quiz_accuracy() {
        println!(
            "Quiz: {}/{} ({:.0}%)",
            stats.quiz_correct,
            stats.quiz_answered,
            accuracy * 100.0
        );
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    dealer
        .visible_cards()
        .map(|card| card.map_or_else(|| String::from("??"), |card| format_card(&card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if card.is_red() {
        colorize(&card.to_string(), "31")
    } else {
        card.to_string()
    }
}
