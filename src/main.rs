//! CLI entry point for quickpaste
//!
//! Provides command-line interface for running the hotkey daemon and for
//! managing the per-slot secrets in the OS keystore.

use std::io::{self, BufRead, Write as _};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::*;
use quickpaste::core::{Settings, SlotIndex, SlotTable};
use quickpaste::hotkey::{GlobalHotkeyBackend, HotkeyRegistry, RegistrationResult};
use quickpaste::paste::{Activation, PasteController};
use quickpaste::system::{EnigoInjector, SystemClipboard};
use quickpaste::vault::{KeyringVault, SecretVault};

#[derive(Parser)]
#[command(name = "quickpaste")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register hotkeys and run the paste daemon
    Run {
        /// Number of secret slots (CTRL+SHIFT+Z, X, 1..5)
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=7))]
        count: u8,

        /// Seconds until the clipboard is scrubbed after a paste (0 disables)
        #[arg(long, default_value_t = 5.0)]
        clear_after: f64,

        /// Milliseconds to let the clipboard settle before the paste keystroke
        #[arg(long, default_value_t = 50)]
        settle_ms: u64,
    },

    /// Store a secret for one slot in the OS keystore
    Set {
        /// Slot to set (1..7)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=7))]
        slot: u8,

        /// Secret value; read from stdin when omitted
        #[arg(long)]
        value: Option<String>,
    },

    /// Show which slots have secrets set
    Status {
        /// Number of slots to show
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=7))]
        count: u8,
    },

    /// Delete every slot secret from the OS keystore
    Wipe {
        /// Number of slots to wipe
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=7))]
        count: u8,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quickpaste=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            count,
            clear_after,
            settle_ms,
        } => run_daemon(count, clear_after, settle_ms)?,
        Commands::Set { slot, value } => set_secret(slot, value)?,
        Commands::Status { count } => show_status(count)?,
        Commands::Wipe { count } => wipe_secrets(count)?,
    }

    Ok(())
}

/// Register the slot chords and run the dispatch loop until `quit`.
fn run_daemon(count: u8, clear_after: f64, settle_ms: u64) -> anyhow::Result<()> {
    if !clear_after.is_finite() || clear_after < 0.0 {
        bail!("--clear-after must be a non-negative number of seconds");
    }

    let settings = Settings {
        slot_count: count,
        clear_after: Duration::from_secs_f64(clear_after),
        settle_delay: Duration::from_millis(settle_ms),
    };
    let table = Arc::new(SlotTable::with_count(settings.slot_count)?);

    let controller = PasteController::new(
        Arc::clone(&table),
        Arc::new(KeyringVault::default()),
        Arc::new(SystemClipboard),
        Arc::new(EnigoInjector),
        &settings,
    );

    let stop = Arc::new(AtomicBool::new(false));
    let (activation_tx, activation_rx) = mpsc::channel::<SlotIndex>();
    let (ready_tx, ready_rx) = mpsc::channel::<Result<Vec<RegistrationResult>, String>>();

    // The hotkey manager is created on the dispatch thread itself: some
    // platforms tie hotkey delivery to the registering thread.
    let dispatch_table = Arc::clone(&table);
    let dispatch_stop = Arc::clone(&stop);
    let dispatch = thread::Builder::new()
        .name("hotkey-dispatch".to_string())
        .spawn(move || {
            let backend = match GlobalHotkeyBackend::new() {
                Ok(backend) => backend,
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };
            let mut registry = HotkeyRegistry::new(backend, dispatch_table);
            let results = registry.register();
            let _ = ready_tx.send(Ok(results));

            registry.run(&dispatch_stop, |slot| {
                let _ = activation_tx.send(slot);
            });
            registry.shutdown();
        })
        .context("failed to spawn dispatch thread")?;

    // Activations cross from the dispatch thread to this worker over the
    // channel; the paste sequence itself is blocking but sub-100ms.
    let paster = thread::Builder::new()
        .name("paste-controller".to_string())
        .spawn(move || {
            for slot in activation_rx {
                match controller.activate(slot) {
                    Ok(Activation::Pasted) => tracing::info!(slot, "secret pasted"),
                    Ok(Activation::SecretAbsent) => {}
                    Err(e) => tracing::error!(slot, error = %e, "activation failed"),
                }
            }
            // Channel closed: daemon is shutting down. Any pending clear is
            // abandoned; the vault is left untouched.
            controller.cancel_pending_clear();
        })
        .context("failed to spawn paste thread")?;

    let results = ready_rx
        .recv()
        .context("dispatch thread exited before registering")?
        .map_err(|e| anyhow::anyhow!("hotkey facility unavailable: {}", e))?;

    println!("{}", "quickpaste daemon".bold());
    let mut registered = 0;
    for result in &results {
        let chord = table
            .chord_of(result.slot)
            .map(|c| c.to_string())
            .unwrap_or_default();
        match &result.result {
            Ok(_) => {
                registered += 1;
                println!("  {} slot {} → {}", "✓".green(), result.slot, chord.cyan());
            }
            Err(e) => {
                println!(
                    "  {} slot {} → {} ({})",
                    "✗".red(),
                    result.slot,
                    chord.cyan(),
                    e
                );
            }
        }
    }

    if registered == 0 {
        stop.store(true, Ordering::SeqCst);
        let _ = dispatch.join();
        let _ = paster.join();
        bail!("no hotkeys could be registered");
    }

    if settings.clear_after.is_zero() {
        println!("  {} clipboard scrubbing disabled", "⚠".yellow());
    } else {
        println!(
            "  clipboard scrubbed {:.1}s after each paste",
            settings.clear_after.as_secs_f64()
        );
    }
    println!("Type {} to exit.", "quit".bold());

    // Block on stdin; EOF counts as quit so the daemon stops cleanly when
    // its input is closed.
    for line in io::stdin().lock().lines() {
        let line = line.unwrap_or_default();
        match line.trim() {
            "quit" | "q" | "exit" => break,
            "" => {}
            other => println!("unknown command: {}", other),
        }
    }

    stop.store(true, Ordering::SeqCst);
    let _ = dispatch.join();
    let _ = paster.join();

    println!("{} stopped", "✓".green());
    Ok(())
}

/// Store one slot's secret in the keystore.
fn set_secret(slot: u8, value: Option<String>) -> anyhow::Result<()> {
    let secret = match value {
        Some(v) => v,
        None => {
            print!("Secret for slot {}: ", slot);
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if secret.is_empty() {
        bail!("empty secret not stored; use `quickpaste wipe` to remove entries");
    }

    let vault = KeyringVault::default();
    vault.set(&format!("str{}", slot), &secret)?;

    println!("{} secret stored for slot {}", "✓".green(), slot);
    Ok(())
}

/// Show chord and set/unset state per slot, with a masked preview.
fn show_status(count: u8) -> anyhow::Result<()> {
    let table = SlotTable::with_count(count)?;
    let vault = KeyringVault::default();

    println!("{}", "Slots".bold());
    for slot in table.slots() {
        let state = match vault.get(&slot.vault_key) {
            Ok(Some(secret)) if !secret.is_empty() => {
                let preview: String = secret.chars().take(6).collect();
                format!("{} ({}...)", "set".green(), preview)
            }
            Ok(_) => format!("{}", "(not set)".dimmed()),
            Err(e) => format!("{} ({})", "unavailable".red(), e),
        };
        println!(
            "  {} {} → {}",
            format!("{}.", slot.index).dimmed(),
            format!("{}", slot.chord).cyan(),
            state
        );
    }

    Ok(())
}

/// Delete every slot secret. Tolerates entries that are already absent.
fn wipe_secrets(count: u8) -> anyhow::Result<()> {
    let table = SlotTable::with_count(count)?;
    let vault = KeyringVault::default();

    for slot in table.slots() {
        vault
            .delete(&slot.vault_key)
            .with_context(|| format!("failed to delete secret for slot {}", slot.index))?;
    }

    println!("{} cleared {} slot secrets", "✓".green(), count);
    Ok(())
}
