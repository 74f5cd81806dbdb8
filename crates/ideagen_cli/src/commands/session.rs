//! `ideagen session` — interactive loop over one [`IdeaSession`].

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use ideagen_core::request::{check_count, check_temperature};
use ideagen_core::{write_export, ExportFormat, IdeaGenerator, IdeaOptions, IdeaSession};

use super::build_generator;
use crate::cli::IdeaArgs;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
enum ReplCommand {
    Gen(String),
    More,
    List,
    Copy,
    Export {
        format: ExportFormat,
        path: Option<PathBuf>,
    },
    Clear,
    Set(Setting),
    Settings,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
enum Setting {
    Count(usize),
    Temperature(f32),
    Style(ideagen_core::Style),
    Tone(ideagen_core::Tone),
}

const HELP: &[(&str, &str)] = &[
    ("gen <topic>", "Generate ideas for a topic (replaces the list)"),
    ("more", "Generate more ideas for the last topic and append them"),
    ("list", "Show the current ideas"),
    ("copy", "Print all ideas as one numbered text block"),
    ("export csv|txt [path]", "Write the list to a file (default content_ideas.csv/.txt)"),
    ("clear", "Drop all ideas and the remembered topic"),
    ("set count|temperature|style|tone <value>", "Change a generation setting"),
    ("settings", "Show the current generation settings"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];

fn parse_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => ReplCommand::Nothing,
        "gen" | "generate" => ReplCommand::Gen(rest.to_string()),
        "more" => ReplCommand::More,
        "list" | "ls" => ReplCommand::List,
        "copy" => ReplCommand::Copy,
        "export" => {
            let (format, path) = match rest.split_once(char::is_whitespace) {
                Some((format, path)) => (format, Some(PathBuf::from(path.trim()))),
                None if rest.is_empty() => bail!("Usage: export csv|txt [path]"),
                None => (rest, None),
            };
            let format = format.parse::<ExportFormat>().map_err(|e| anyhow!(e))?;
            ReplCommand::Export { format, path }
        }
        "clear" => ReplCommand::Clear,
        "set" => ReplCommand::Set(parse_setting(rest)?),
        "settings" => ReplCommand::Settings,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => bail!("Unknown command '{other}'. Type 'help' for commands."),
    };
    Ok(command)
}

fn parse_setting(rest: &str) -> Result<Setting> {
    let (name, value) = rest
        .split_once(char::is_whitespace)
        .map(|(n, v)| (n, v.trim()))
        .ok_or_else(|| anyhow!("Usage: set count|temperature|style|tone <value>"))?;

    let setting = match name.to_ascii_lowercase().as_str() {
        "count" | "n" => {
            let n: usize = value
                .parse()
                .with_context(|| format!("'{value}' is not a whole number"))?;
            Setting::Count(check_count(n)?)
        }
        "temperature" | "temp" => {
            let t: f32 = value
                .parse()
                .with_context(|| format!("'{value}' is not a number"))?;
            Setting::Temperature(check_temperature(t)?)
        }
        "style" => Setting::Style(value.parse()?),
        "tone" => Setting::Tone(value.parse()?),
        other => bail!("Unknown setting '{other}' (expected count, temperature, style or tone)"),
    };
    Ok(setting)
}

pub async fn handle(args: IdeaArgs) -> Result<()> {
    let generator = build_generator(&args)?;
    let mut options = args.options();
    let mut session = IdeaSession::new();
    tracing::debug!(session = %session.id(), "session started");

    output::header("ideagen session");
    output::dim("Type 'help' for commands, 'quit' to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        output::prompt("ideagen>")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };
        if let Err(e) = run(command, &generator, &mut session, &mut options).await {
            output::error(&e.to_string());
        }
    }

    tracing::debug!(session = %session.id(), ideas = session.ideas().len(), "session ended");
    Ok(())
}

async fn run(
    command: ReplCommand,
    generator: &IdeaGenerator,
    session: &mut IdeaSession,
    options: &mut IdeaOptions,
) -> Result<()> {
    match command {
        ReplCommand::Gen(topic) => {
            let spinner = output::spinner("Generating ideas…");
            let started = Instant::now();
            let result = session.generate(generator, &topic, options).await;
            output::spinner_clear(&spinner);
            let count = result?.len();
            output::ideas(session.ideas());
            output::success(&format!(
                "Generated {count} ideas (took {:.1}s)",
                started.elapsed().as_secs_f64()
            ));
        }
        ReplCommand::More => {
            let spinner = output::spinner("Generating additional ideas…");
            let result = session.generate_more(generator, options).await;
            output::spinner_clear(&spinner);
            let appended = result?.len();
            output::ideas(session.ideas());
            output::success(&format!(
                "Appended {appended} more ideas — now {} total",
                session.ideas().len()
            ));
        }
        ReplCommand::List => {
            if session.is_empty() {
                output::dim("No ideas yet. Try: gen <topic>");
            } else {
                output::ideas(session.ideas());
            }
        }
        ReplCommand::Copy => {
            if session.is_empty() {
                output::dim("No ideas yet. Try: gen <topic>");
            } else {
                output::block("copy", &session.to_text());
            }
        }
        ReplCommand::Export { format, path } => {
            if session.is_empty() {
                bail!("No ideas to export yet.");
            }
            let path = path.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
            write_export(&path, format, session.ideas())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!(
                "Exported {} ideas to {}",
                session.ideas().len(),
                path.display()
            ));
        }
        ReplCommand::Clear => {
            session.clear();
            output::success("Cleared ideas.");
        }
        ReplCommand::Set(setting) => {
            apply_setting(options, setting);
            show_settings(session, options);
        }
        ReplCommand::Settings => show_settings(session, options),
        ReplCommand::Help => {
            let mut table = output::table();
            output::table_header(&mut table, "Command", "Description");
            for (cmd, desc) in HELP {
                output::table_row(&mut table, cmd, desc);
            }
            output::table_print(&table, "commands", HELP);
        }
        ReplCommand::Quit | ReplCommand::Nothing => {}
    }
    Ok(())
}

fn apply_setting(options: &mut IdeaOptions, setting: Setting) {
    match setting {
        Setting::Count(n) => options.count = n,
        Setting::Temperature(t) => options.temperature = t,
        Setting::Style(s) => options.style = s,
        Setting::Tone(t) => options.tone = t,
    }
}

fn show_settings(session: &IdeaSession, options: &IdeaOptions) {
    if output::is_json() {
        let data = serde_json::json!({
            "options": options,
            "topic": session.topic(),
            "ideas": session.ideas().len(),
        });
        output::data("settings", &data);
        return;
    }
    output::kv("count", &options.count.to_string());
    output::kv("temperature", &format!("{:.1}", options.temperature));
    output::kv("style", options.style.label());
    output::kv("tone", options.tone.label());
    output::kv("topic", session.topic().unwrap_or("(none)"));
    output::kv("ideas", &session.ideas().len().to_string());
}
