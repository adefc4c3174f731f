use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use triage_client::client::{HttpTriageClient, TriageService};
use triage_client::config::ClientConfig;
use triage_client::models::{Bleeding, Breathing, Consciousness, PainLevel, TriageForm, YesNo};
use triage_client::render::{render_notice, render_text};
use triage_client::session::{FlowOutcome, TriageSession};
use triage_client::triage::{Language, Presentation};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "First-aid triage client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Triage service base URL (overrides TRIAGE_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Display language: ar|en (overrides TRIAGE_LANG)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Fallback emergency number (overrides TRIAGE_EMERGENCY_NUMBER)
    #[arg(long, global = true)]
    emergency_number: Option<String>,

    /// Per-request timeout in seconds (overrides TRIAGE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print the display state as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the case described by the field flags
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Activate the primary action after rendering
        #[arg(long)]
        reveal_call: bool,
    },

    /// Pre-fill the fields from a free-text description, then classify
    Assist {
        /// Free-text description of the case
        text: String,

        #[command(flatten)]
        form: FormArgs,

        /// Activate the primary action after rendering
        #[arg(long)]
        reveal_call: bool,
    },

    /// Check that the triage service is up
    Health,
}

#[derive(Args, Default)]
struct FormArgs {
    #[arg(long)]
    age: Option<String>,
    #[arg(long)]
    breathing: Option<Breathing>,
    #[arg(long)]
    conscious: Option<Consciousness>,
    #[arg(long)]
    bleeding: Option<Bleeding>,
    #[arg(long)]
    chest_pain: Option<YesNo>,
    #[arg(long)]
    pain_level: Option<PainLevel>,
    #[arg(long)]
    vomiting: Option<YesNo>,
    #[arg(long)]
    dizziness: Option<YesNo>,
}

impl FormArgs {
    fn apply(self, form: &mut TriageForm) {
        if let Some(age) = self.age {
            form.age = age;
        }
        form.breathing = self.breathing.unwrap_or(form.breathing);
        form.conscious = self.conscious.unwrap_or(form.conscious);
        form.bleeding = self.bleeding.unwrap_or(form.bleeding);
        form.chest_pain = self.chest_pain.unwrap_or(form.chest_pain);
        form.pain_level = self.pain_level.unwrap_or(form.pain_level);
        form.vomiting = self.vomiting.unwrap_or(form.vomiting);
        form.dizziness = self.dizziness.unwrap_or(form.dizziness);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    triage_client::init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(base) = cli.api_base.as_deref() {
        config = config.with_api_base(base);
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if let Some(number) = cli.emergency_number {
        config.emergency_number = number;
    }
    if cli.timeout_secs.is_some() {
        config.request_timeout_secs = cli.timeout_secs;
    }

    tracing::debug!(api_base = %config.api_base, lang = config.language.code(), "Client configured");

    let client = match HttpTriageClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let session = TriageSession::new(client, Presentation::from(&config));

    match cli.command {
        Commands::Submit { form, reveal_call } => {
            session.update_form(|f| form.apply(f));
            let outcome = session.submit().await;
            finish(&session, outcome, reveal_call, cli.json)
        }
        Commands::Assist { text, form, reveal_call } => {
            session.update_form(|f| form.apply(f));
            let outcome = session.submit_assisted(&text).await;
            finish(&session, outcome, reveal_call, cli.json)
        }
        Commands::Health => health(&session, cli.json).await,
    }
}

fn finish<S: TriageService>(
    session: &TriageSession<S>,
    outcome: FlowOutcome,
    reveal_call: bool,
    json: bool,
) -> ExitCode {
    if let Some(notice) = outcome.notice() {
        eprint!("{}", render_notice(notice));
        return ExitCode::FAILURE;
    }

    if reveal_call {
        let target = session.activate_primary();
        tracing::debug!(?target, "Primary action activated");
    }

    let ui = session.ui();
    if json {
        match serde_json::to_string_pretty(&ui) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_text(&ui));
    }
    ExitCode::SUCCESS
}

async fn health<S: TriageService>(session: &TriageSession<S>, json: bool) -> ExitCode {
    match session.health().await {
        Ok(status) => {
            if json {
                match serde_json::to_string_pretty(&status) {
                    Ok(text) => println!("{text}"),
                    Err(e) => eprintln!("{e}"),
                }
            } else {
                println!(
                    "{} ({}/{} models)",
                    status.status, status.models_loaded, status.models_expected
                );
                for error in &status.model_errors {
                    println!("  {error}");
                }
            }
            if status.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
