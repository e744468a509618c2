//! Luscher Color Quiz
//!
//! Interactive terminal front end: two rounds of eight cards, then the
//! personality and current-state lookups.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

use luscher::config::LookupConfig;
use luscher::orchestrator::{Phase, QuizSession, TestOrchestrator};
use luscher::quiz::CardId;
use luscher::utils::logging::init_tracing;

// ──────────────────────────────────────────────────────────────────────────────
// INPUT
// ──────────────────────────────────────────────────────────────────────────────

fn prompt(stdin: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for one full round, re-prompting until all eight picks are accepted.
fn play_round(stdin: &mut impl BufRead, session: &mut QuizSession, title: &str) -> Result<bool> {
    let round_phase = session.phase();
    loop {
        let remaining: Vec<&str> = CardId::ALL
            .iter()
            .filter(|c| !session.current_picks().contains(*c))
            .map(CardId::symbol)
            .collect();

        let Some(line) = prompt(
            stdin,
            &format!("{} - pick in order of preference [{}]: ", title, remaining.join(" ")),
        )?
        else {
            return Ok(false);
        };

        for c in line.chars().filter(|c| !c.is_whitespace()) {
            let symbol = c.to_ascii_uppercase().to_string();
            let Some(card) = CardId::from_symbol(&symbol) else {
                println!("  '{}' is not a card (A-H), ignored", c);
                continue;
            };
            match session.pick(card) {
                Ok(phase) if phase != round_phase => return Ok(true),
                Ok(_) => {}
                Err(e) => println!("  {}", e),
            }
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing()?;

    let config = LookupConfig::from_env().context("Failed to load lookup configuration")?;
    let orchestrator = TestOrchestrator::from_config(&config).context("Failed to build lookup client")?;
    info!("Lookup endpoints: p={} x={}", config.url_p, config.url_x);

    println!("\n{}", "═".repeat(60));
    println!("🎨 Luscher Color Test v{}", env!("CARGO_PKG_VERSION"));
    println!("{}\n", "═".repeat(60));

    let mut stdin = io::stdin().lock();
    let mut session = QuizSession::new();

    loop {
        session.start();
        if !play_round(&mut stdin, &mut session, "Round 1")? {
            break;
        }
        if !play_round(&mut stdin, &mut session, "Round 2")? {
            break;
        }
        debug_assert_eq!(session.phase(), Phase::AwaitingResult);

        println!("\n⏳ Looking up your result...");
        match session.generate_result(&orchestrator).await {
            Ok(result) => {
                println!("\n{}", "─".repeat(60));
                println!("Personality:   {}", result.personality());
                println!("Current state: {}", result.current_state());
                println!("{}\n", "─".repeat(60));
            }
            Err(e) => println!("\n❌ {}\n", e),
        }

        match prompt(&mut stdin, "[r]etry or [q]uit? ")? {
            Some(answer) if answer.eq_ignore_ascii_case("r") => session.reset(),
            _ => break,
        }
    }

    println!("👋 Goodbye");
    Ok(())
}
