use std::io::{self, BufRead, Write};

use colored::Colorize;

use zy_core::{Hexagram, Line, changing_positions, primary_pattern, relating_pattern};
use zy_oracle::{DivinationResult, GeminiBackend, Interpreter, ModelVariant, OracleError};
use zy_session::{DivinationSession, LINES_PER_CAST, Phase, Preferences, SessionConfig};

use crate::render;

/// Options for the `cast` subcommand.
pub struct CastArgs {
    pub question: Option<String>,
    pub seed: Option<u64>,
    pub model: Option<String>,
    pub auto: bool,
    pub no_oracle: bool,
}

pub async fn run(args: CastArgs) -> Result<(), String> {
    let prefs = Preferences::load().map_err(|e| e.to_string())?;
    let model = match &args.model {
        Some(name) => ModelVariant::parse(name)
            .ok_or_else(|| format!("unknown model variant '{name}', use: flash, pro"))?,
        None => prefs.model,
    };

    let mut config = SessionConfig::default().with_model(model);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = DivinationSession::new(config);
    session.begin().map_err(|e| e.to_string())?;

    let question = match args.question {
        Some(question) => question,
        None => prompt_question()?,
    };
    session
        .confirm_question(&question)
        .map_err(|e| e.to_string())?;

    println!("  {} the coins six times", "Throw".bold());
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    // The first throw happens on entering the casting phase; the rest wait
    // for the seeker unless --auto is set.
    let mut first = true;
    while !session.is_cast_complete() {
        if !first && !args.auto {
            print!(
                "  Press Enter to throw ({} of {LINES_PER_CAST})... ",
                session.casts().len() + 1
            );
            io::stdout().flush().map_err(|e| e.to_string())?;
            line.clear();
            if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                return Err("input closed before the cast was complete".into());
            }
        }
        first = false;
        if let Some(cast) = session.cast() {
            println!("  {}", render::toss_line(&cast.toss));
        }
    }
    println!();

    print_resolution(&session);

    if args.no_oracle {
        return Ok(());
    }

    let backend = build_backend(&prefs).map_err(|e| e.user_message().to_string())?;
    let interpreter = Interpreter::new(backend);

    let (generation, request) = session.start_interpretation().map_err(|e| e.to_string())?;
    println!("  Consulting the oracle ({model})...");
    println!();

    let reply = interpreter.interpret(&request).await;
    session.finish_interpretation(generation, reply);

    match session.phase() {
        Phase::Result => {
            if let Some(result) = session.outcome() {
                print_result(&session, result);
            }
            Ok(())
        }
        Phase::Error => Err(session
            .failure()
            .unwrap_or("The interpretation failed. Please try again.")
            .to_string()),
        phase => Err(format!("session settled in unexpected phase {phase}")),
    }
}

fn prompt_question() -> Result<String, String> {
    println!("  {}", "Formulate your question".bold());
    println!("  A clearly put question or intention makes for a clearer answer.");
    println!("  Leave it empty for general guidance.");
    println!();
    print!("  > ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut question = String::new();
    io::stdin()
        .lock()
        .read_line(&mut question)
        .map_err(|e| e.to_string())?;
    println!();
    Ok(question.trim().to_string())
}

fn build_backend(prefs: &Preferences) -> Result<GeminiBackend, OracleError> {
    match GeminiBackend::from_env() {
        Ok(backend) => Ok(backend),
        Err(env_err) => match &prefs.api_key {
            Some(key) => GeminiBackend::new(key.clone()),
            None => Err(env_err),
        },
    }
}

fn print_resolution(session: &DivinationSession) {
    let lines = session.lines();
    let cast_lines: [Line; 6] = match lines.as_slice().try_into() {
        Ok(array) => array,
        Err(_) => return,
    };
    let primary = Hexagram::for_pattern(primary_pattern(&cast_lines));
    let changing = changing_positions(&cast_lines);

    println!("  {}", "The cast".bold());
    println!();
    println!("{}", render::heading(primary));
    println!("  {}", render::trigram_summary(primary));
    for row in render::diagram(&lines).lines() {
        println!("  {row}");
    }
    println!();

    if changing.is_empty() {
        println!("  No changing lines.");
    } else {
        let positions: Vec<String> = changing.iter().map(|p| p.to_string()).collect();
        println!("  Changing lines: {}", positions.join(", "));
        let relating = Hexagram::for_pattern(relating_pattern(&cast_lines));
        println!("  Becomes {}", render::heading(relating));
    }
    println!();
}

fn print_result(session: &DivinationSession, result: &DivinationResult) {
    if !session.question().is_empty() {
        println!("  {}", "Your question".bold());
        println!("  \"{}\"", session.question());
        println!();
    }

    println!("  {}", result.primary_hexagram.name.bold());
    println!("{}", indent(&result.primary_hexagram.judgment));
    println!();
    println!("  {}", "The Image".bold());
    println!("{}", indent(&result.primary_hexagram.image));

    if !result.changing_lines.is_empty() {
        println!();
        println!("  {}", "The movement of change".bold());
        for entry in &result.changing_lines {
            println!("  Line {}:", entry.line);
            println!("{}", indent(&entry.text));
        }
    }

    if let Some(secondary) = &result.secondary_hexagram {
        println!();
        println!("  {}", secondary.name.bold());
        println!("{}", indent(&secondary.judgment));
    }

    println!();
    println!("  {}", "Final counsel".bold());
    println!("{}", indent(&result.summary));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
