//! Solvio terminal front end.
//!
//! Plain lines are chat turns; `/`-prefixed lines trigger actions. Logs go
//! to stderr so they never interleave with the transcript.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use solvio::application::SolvioApp;
use solvio::config::AppConfig;
use solvio::domain::decision::{Decision, DecisionOption, Sender};
use solvio::domain::foundation::DecisionId;
use solvio::domain::session::{SessionError, SessionState};

const HELP: &str = "\
Commands:
  <text>           talk to the coach (describe your problem first)
  /analyze         generate and analyze options
  /retry           re-run analysis for options that are missing one
  /recommend       get a recommendation
  /save            save the decision and start a new one
  /history [id]    list saved decisions, or show one
  /insights        show decision-making tips
  /refresh         fetch a new tip
  /help            show this help
  /quit            exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("solvio=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let mut app = SolvioApp::from_config(&config)?;
    info!("solvio started");

    println!("{HELP}\n");
    let mut shown = render_session(app.orchestrator().state(), 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        let outcome = match command {
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{HELP}");
                Ok(())
            }
            "/analyze" => app.orchestrator_mut().analyze_problem().await,
            "/retry" => app.orchestrator_mut().retry_analysis().await,
            "/recommend" => app.orchestrator_mut().get_recommendation().await,
            "/save" => match app.orchestrator_mut().save_and_reset().await {
                Ok(decision) => {
                    println!("Saved \"{}\" ({}).", decision.problem(), decision.id());
                    shown = 0;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            "/history" => {
                show_history(&app, arg).await;
                Ok(())
            }
            "/insights" => {
                show_insights(&app);
                Ok(())
            }
            "/refresh" => {
                app.insights_mut().refresh().await;
                show_insights(&app);
                Ok(())
            }
            _ if command.starts_with('/') => {
                println!("Unknown command {command}. Type /help.");
                Ok(())
            }
            _ => app.orchestrator_mut().submit_text(line).await,
        };

        if let Err(e) = outcome {
            println!("! {}", describe(&e));
        }
        shown = render_session(app.orchestrator().state(), shown);
    }

    Ok(())
}

/// Prints messages after the first `shown`, then the option and
/// recommendation panels. Returns the new message count.
fn render_session(state: &SessionState, shown: usize) -> usize {
    for message in state.messages().iter().skip(shown) {
        match message.sender() {
            Sender::User => println!("you> {}", message.text()),
            Sender::Assistant => println!("solvio> {}", message.text()),
        }
    }

    if !state.options().is_empty() && state.recommendation().is_none() {
        println!("\nOptions:");
        for option in state.options() {
            print_option(option);
        }
        if state.can_recommend() {
            println!("All options analyzed. Type /recommend.");
        } else if state.can_retry_analysis() {
            println!("Some analyses failed. Type /retry.");
        }
    }

    if let Some(recommendation) = state.recommendation() {
        println!("\nRecommendation: {}", recommendation.choice);
        println!("  {}", recommendation.reasoning);
        println!("Type /save to keep this decision.");
    }

    if state.can_generate_options() {
        println!("(type /analyze when you're ready for options)");
    }

    state.messages().len()
}

fn print_option(option: &DecisionOption) {
    println!("  [{}] {}", option.id(), option.title());
    match option.analysis() {
        Some(analysis) => {
            for pro in &analysis.pros {
                println!("      + {pro}");
            }
            for con in &analysis.cons {
                println!("      - {con}");
            }
        }
        None => println!("      (no analysis)"),
    }
}

async fn show_history(app: &SolvioApp, arg: &str) {
    if arg.is_empty() {
        let history = app.history().await;
        if history.is_empty() {
            println!("No saved decisions yet.");
        }
        for decision in history {
            println!(
                "{}  {}  -> {}  [{}]",
                decision.date(), decision.problem(), decision.recommendation().choice, decision.id()
            );
        }
        return;
    }

    let found = match arg.parse::<DecisionId>() {
        Ok(id) => app.decision(&id).await,
        Err(_) => None,
    };
    match found {
        Some(decision) => print_decision(&decision),
        None => println!("No decision with id {arg}."),
    }
}

fn print_decision(decision: &Decision) {
    println!("{}\n{}", decision.problem(), decision.date());
    for option in decision.options() {
        print_option(option);
    }
    println!("Recommendation: {}", decision.recommendation().choice);
    println!("  {}", decision.recommendation().reasoning);
}

fn show_insights(app: &SolvioApp) {
    let board = app.insights().board();
    if let Some(error) = board.error() {
        println!("! {error}");
    }
    for insight in board.insights() {
        println!("* {insight}");
    }
}

fn describe(error: &SessionError) -> String {
    match error {
        SessionError::EmptyInput => "Type something first.".to_string(),
        SessionError::InputNotAccepted(_) => {
            "The conversation is over for this decision. Use the commands above.".to_string()
        }
        other => other.to_string(),
    }
}
