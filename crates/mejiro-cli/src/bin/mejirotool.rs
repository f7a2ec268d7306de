use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use mejiro_core::user_dict::UserDict;
use mejiro_core::TypingLayout;
use mejiro_session::TranslatorSession;

#[derive(Parser)]
#[command(name = "mejirotool", about = "Mejiro stroke translation diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Romaji,
    Jis,
}

#[derive(Subcommand)]
enum Command {
    /// Translate strokes (from arguments, or stdin when none are given)
    Translate {
        /// Strokes to translate, e.g. KAn-TA
        strokes: Vec<String>,
        /// Render output as typing-layout keystrokes
        #[arg(long)]
        typing_mode: bool,
        /// Typing layout for --typing-mode
        #[arg(long, value_enum, default_value = "romaji")]
        layout: Layout,
        /// Path to a JSON user dictionary overlay
        #[arg(long)]
        users: Option<PathBuf>,
        /// Show the dispatch rule next to each translation
        #[arg(long)]
        show_rule: bool,
        /// Output one JSON record per stroke instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find strokes that produce the given text
    Reverse {
        /// Output text to look up
        text: String,
        /// Path to a JSON user dictionary overlay
        #[arg(long)]
        users: Option<PathBuf>,
    },
}

fn load_users(path: Option<&PathBuf>) -> UserDict {
    match path {
        Some(p) => match UserDict::with_file(p) {
            Ok(dict) => dict,
            Err(e) => {
                eprintln!("Failed to load user dictionary {}: {}", p.display(), e);
                process::exit(1);
            }
        },
        None => UserDict::default(),
    }
}

#[derive(Serialize)]
struct TranslationRecord<'a> {
    stroke: &'a str,
    text: &'a str,
    body: &'a str,
    rule: &'a str,
}

fn translate_one(session: &mut TranslatorSession, stroke: &str, show_rule: bool, json: bool) {
    match session.translate(stroke) {
        Ok(t) => {
            if json {
                let record = TranslationRecord {
                    stroke,
                    text: &t.text,
                    body: &t.body,
                    rule: t.rule.label(),
                };
                match serde_json::to_string(&record) {
                    Ok(line) => println!("{}", line),
                    Err(e) => {
                        eprintln!("Failed to serialize record: {}", e);
                        process::exit(1);
                    }
                }
            } else if show_rule {
                println!("{}\t{}\t[{}]", stroke, t.text, t.rule);
            } else {
                println!("{}", t.text);
            }
        }
        Err(e) => {
            eprintln!("Failed to translate {}: {}", stroke, e);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate {
            strokes,
            typing_mode,
            layout,
            users,
            show_rule,
            json,
        } => {
            let mut session = TranslatorSession::new(load_users(users.as_ref()));
            session.set_typing_mode(typing_mode);
            session.set_layout(match layout {
                Layout::Romaji => TypingLayout::Romaji,
                Layout::Jis => TypingLayout::JisKana,
            });

            if strokes.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            eprintln!("Failed to read line: {}", e);
                            process::exit(1);
                        }
                    };
                    for stroke in line.split_whitespace() {
                        translate_one(&mut session, stroke, show_rule, json);
                    }
                }
            } else {
                for stroke in &strokes {
                    translate_one(&mut session, stroke, show_rule, json);
                }
            }
        }

        Command::Reverse { text, users } => {
            let session = TranslatorSession::new(load_users(users.as_ref()));
            let strokes = session.reverse_lookup(&text);
            if strokes.is_empty() {
                eprintln!("No strokes found for {}", text);
                process::exit(1);
            }
            for stroke in strokes {
                println!("{}", stroke);
            }
        }
    }
}
