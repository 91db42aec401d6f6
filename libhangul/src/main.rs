use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use libhangul::{
    create_ime_engine, keymap, script, Composition, CompositionAutomaton, HangulConfig, ImeEngine,
    KeyEvent, KeyResult, SpanOp,
};

#[derive(Parser)]
#[command(name = "libhangul")]
#[command(about = "Hangul 2-beolsik jamo composition engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// HangulConfig TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log composition transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a key script and print the resulting text
    Type {
        /// Keys to type; `{bs}`, `{shift}`, `{mode}` and `{cursor}` name special keys
        script: String,
        /// Also print every span operation
        #[arg(long)]
        ops: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive mode: each line is a key script, state carries over
    Repl,
    /// Print the 2-beolsik key table
    Keymap,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<HangulConfig> {
    match path {
        Some(path) => HangulConfig::load_toml(path),
        None => Ok(HangulConfig::default()),
    }
}

/// Feed events to the engine, applying the host's default action for keys
/// the engine passes through.
fn feed(ime: &mut ImeEngine<CompositionAutomaton>, doc: &mut Composition, events: &[KeyEvent]) {
    for &event in events {
        if ime.process_key(event, doc) == KeyResult::NotHandled {
            match event {
                KeyEvent::Char(ch) => doc.insert_char(ch),
                KeyEvent::Backspace => {
                    doc.delete_before();
                }
                _ => {}
            }
        }
    }
}

fn format_op(op: &SpanOp) -> String {
    match op.char() {
        Some(ch) => format!("{}('{}' U+{:04X})", op_name(op), ch, ch as u32),
        None => op_name(op).to_string(),
    }
}

fn op_name(op: &SpanOp) -> &'static str {
    match op {
        SpanOp::StartNew(_) => "start_new",
        SpanOp::Replace(_) => "replace",
        SpanOp::AppendAsNewSpan(_) => "append_as_new_span",
        SpanOp::Clear => "clear",
        SpanOp::Commit => "commit",
    }
}

fn print_state(doc: &Composition, ops: &[SpanOp], show_ops: bool) {
    if show_ops {
        for (i, op) in ops.iter().enumerate() {
            println!("  {:>3}. {}", i + 1, format_op(op));
        }
    }
    println!("text:      {}", doc.text());
    println!("committed: {}", doc.committed);
    println!("composing: {}", doc.preedit);
}

fn run_type(config: HangulConfig, keys: &str, show_ops: bool, json: bool) -> Result<()> {
    let events = script::parse(keys).context("parse key script")?;
    let mut ime = create_ime_engine(config);
    let mut doc = Composition::new();
    feed(&mut ime, &mut doc, &events);

    if json {
        let value = serde_json::json!({
            "text": doc.text(),
            "committed": doc.committed,
            "composing": doc.preedit,
            "ops": doc.ops,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_state(&doc, &doc.ops, show_ops);
    }
    Ok(())
}

fn run_repl(config: HangulConfig) -> Result<()> {
    let mut ime = create_ime_engine(config);
    let mut doc = Composition::new();

    println!("libhangul interactive mode: type key scripts (e.g. gksrmf) and press Enter");
    println!("Special keys: {{bs}} {{shift}} {{mode}} {{cursor}}. Ctrl-D to exit.");
    println!("Separators: {:?}", ime.config().separators);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        if line.is_empty() {
            continue;
        }
        match script::parse(&line) {
            Ok(events) => {
                feed(&mut ime, &mut doc, &events);
                let ops = doc.take_ops();
                print_state(&doc, &ops, true);
                println!("mode: {:?}  shift: {:?}", ime.session().mode(), ime.session().shift());
            }
            Err(e) => eprintln!("error: {:#}", e),
        }
        io::stdout().flush()?;
    }

    ime.finish(&mut doc);
    println!("final: {}", doc.text());
    Ok(())
}

fn run_keymap() {
    println!("key  plain  shift");
    let plain: Vec<_> = keymap::bindings().filter(|&(_, shifted, _)| !shifted).collect();
    let shifted: Vec<_> = keymap::bindings().filter(|&(_, shifted, _)| shifted).collect();
    for ((key, _, jamo), (_, _, shifted_jamo)) in plain.iter().zip(shifted.iter()) {
        let marker = if jamo == shifted_jamo { "" } else { " *" };
        println!(
            "{:>3}  {:>5}  {:>5}{}",
            key,
            jamo.to_char(),
            shifted_jamo.to_char(),
            marker
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    match cli.command {
        Commands::Type { script, ops, json } => run_type(config, &script, ops, json),
        Commands::Repl => run_repl(config),
        Commands::Keymap => {
            run_keymap();
            Ok(())
        }
    }
}
