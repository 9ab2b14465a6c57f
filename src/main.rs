use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trading_plan::cli::{build_input, Cli, Commands};
use trading_plan::config::Config;
use trading_plan::models::FieldEdit;
use trading_plan::plan::evaluate;
use trading_plan::session::PlanSession;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing; stdout is reserved for the plan itself
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let renderer = cfg.renderer();

    match cli.command {
        Commands::Render(args) => {
            let input = build_input(&args, &cfg)?;
            let eval = evaluate(&input, &renderer);
            if input.action.is_opening() && !eval.metrics.meets_target_ratio() {
                warn!(
                    "Risk/reward {:.2} is below the 3.0 target",
                    eval.metrics.risk_reward_ratio
                );
            }
            print!("{}", eval.text);
        }
        Commands::Metrics(args) => {
            let input = build_input(&args, &cfg)?;
            let eval = evaluate(&input, &renderer);
            println!("{}", serde_json::to_string_pretty(&eval.metrics)?);
        }
        Commands::Edit(args) => {
            let input = build_input(&args, &cfg)?;
            let session = PlanSession::new(input, renderer);
            run_editor(session)?;
        }
    }

    Ok(())
}

fn run_editor(mut session: PlanSession) -> Result<()> {
    info!("Editing plan. Enter field=value, or: show, reset, fields, quit");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", session.text())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "show" => write!(out, "{}", session.text())?,
            "reset" => write!(out, "{}", session.reset().text)?,
            "fields" => writeln!(out, "{}", FieldEdit::FIELDS.join(", "))?,
            _ => match session.apply_line(&line) {
                Ok(eval) => write!(out, "{}", eval.text)?,
                Err(e) => eprintln!("Error: {e}"),
            },
        }
        out.flush()?;
    }

    Ok(())
}
