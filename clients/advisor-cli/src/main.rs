use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use advisor::{assess, AdviceError, AdviceRequest, Assessment, CardInput, Hand, Rank};
use clap::{Parser, Subcommand};
use serde::Serialize;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "advisor", about = "Blackjack play advisor")]
struct Cli {
    /// Print the full assessment as JSON instead of the headline
    #[arg(long, env = "ADVISOR_JSON", global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend a play for one hand
    Advise {
        /// Dealer upcard (A, 2-10, J, Q, K)
        #[arg(long, default_value = "")]
        dealer: String,

        /// Player cards, repeated or comma separated
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        player: Vec<String>,

        /// A cash-out offer is on the table
        #[arg(long, env = "ADVISOR_CASHOUT")]
        cashout: bool,
    },

    /// Read newline-delimited JSON requests and answer each one
    Batch {
        /// Request file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List the accepted card ranks and their values
    Ranks,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Advise {
            dealer,
            player,
            cashout,
        } => cmd_advise(&mut out, &dealer, &player, cashout, cli.json),
        Command::Batch { input } => cmd_batch(&mut out, input, cli.json),
        Command::Ranks => cmd_ranks(&mut out, cli.json),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

// ── Advise ──

fn build_request(dealer: &str, player: &[String], cashout: bool) -> AdviceRequest {
    // An empty form has two blank card slots
    let player_cards = if player.is_empty() {
        Hand::from(vec![CardInput::parse(""), CardInput::parse("")])
    } else {
        Hand::from_symbols(player)
    };
    AdviceRequest::new(CardInput::parse(dealer), player_cards, cashout)
}

fn unrecognized_card_warnings(request: &AdviceRequest) -> Vec<String> {
    let dealer = (!request.dealer_card.is_recognized())
        .then(|| format!("Dealer card {} not recognized, counting it as 0", request.dealer_card));
    let players = request
        .player_cards
        .cards
        .iter()
        .filter(|card| !card.is_recognized())
        .map(|card| format!("Player card {card} not recognized, counting it as 0"));
    dealer.into_iter().chain(players).collect()
}

fn answer(out: &mut impl Write, request: &AdviceRequest, json: bool) -> Result<(), BoxErr> {
    for warning in unrecognized_card_warnings(request) {
        log::warn!("{warning}");
    }
    write_assessment(out, &assess(request), json)
}

fn cmd_advise(
    out: &mut impl Write,
    dealer: &str,
    player: &[String],
    cashout: bool,
    json: bool,
) -> Result<(), BoxErr> {
    answer(out, &build_request(dealer, player, cashout), json)
}

fn write_assessment(out: &mut impl Write, assessment: &Assessment, json: bool) -> Result<(), BoxErr> {
    if json {
        writeln!(out, "{}", serde_json::to_string(assessment)?)?;
    } else {
        writeln!(out, "{}", assessment.headline())?;
    }
    Ok(())
}

// ── Batch ──

fn parse_request_line(line_number: usize, line: &str) -> Result<AdviceRequest, AdviceError> {
    serde_json::from_str(line).map_err(|e| AdviceError::Request(format!("line {line_number}: {e}")))
}

fn run_batch(input: impl BufRead, out: &mut impl Write, json: bool) -> Result<usize, BoxErr> {
    let mut answered = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = parse_request_line(index + 1, &line)?;
        answer(out, &request, json)?;
        answered += 1;
    }
    Ok(answered)
}

fn cmd_batch(out: &mut impl Write, input: Option<PathBuf>, json: bool) -> Result<(), BoxErr> {
    let answered = match input {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
            run_batch(BufReader::new(file), out, json)?
        }
        None => run_batch(io::stdin().lock(), out, json)?,
    };
    log::info!("Answered {answered} requests");
    Ok(())
}

// ── Ranks ──

#[derive(Serialize)]
struct RankEntry {
    symbol: &'static str,
    value: u8,
}

fn cmd_ranks(out: &mut impl Write, json: bool) -> Result<(), BoxErr> {
    let entries: Vec<RankEntry> = Rank::ALL
        .iter()
        .map(|rank| RankEntry {
            symbol: rank.symbol(),
            value: rank.value(),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string(&entries)?)?;
    } else {
        for entry in entries {
            writeln!(out, "{}\t{}", entry.symbol, entry.value)?;
        }
    }
    Ok(())
}
