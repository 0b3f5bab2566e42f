mod store;
mod terminal;

use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use fitcoach::config::AuthTimeouts;
use fitcoach::identity::{OAuthProvider, SupabaseAuth};
use fitcoach::sync::{MemoryRedirectStore, page_url};
use fitcoach::{AuthContext, AuthError, IdentityService, Registration, Session, SessionSynchronizer, SitePages, SupabaseConfig};
use serde_json::{Map, Value};

use store::FileSessionStore;
use terminal::TerminalRenderer;

type CliSync = SessionSynchronizer<SupabaseAuth<FileSessionStore>, TerminalRenderer, MemoryRedirectStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("no session; run `fitcoach login` first")]
    SignedOut,
}

#[derive(Parser, Debug)]
#[command(name = "fitcoach", about = "FitCoach Pro account CLI")]
struct Cli {
    #[arg(long, env = "SUPABASE_URL")]
    supabase_url: String,

    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    anon_key: String,

    /// Origin of the site, used for redirect URLs.
    #[arg(long, env = "FITCOACH_SITE_URL", default_value = "http://127.0.0.1:3000")]
    site_url: String,

    #[arg(long, env = "FITCOACH_SESSION_FILE", default_value = ".fitcoach-session.json")]
    session_file: PathBuf,

    #[arg(long, env = "AUTH_REQUEST_TIMEOUT_SECS", default_value_t = AuthTimeouts::default().request_secs)]
    request_timeout: u64,

    #[arg(long, env = "AUTH_CONNECT_TIMEOUT_SECS", default_value_t = AuthTimeouts::default().connect_secs)]
    connect_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FITCOACH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FITCOACH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
        /// Extra user metadata as a JSON object.
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Print the provider authorize URL for an OAuth sign-in.
    OauthUrl {
        #[arg(long, default_value = "google")]
        provider: String,
    },
    /// Complete an OAuth or email-link redirect from its URL fragment.
    Recover { fragment: String },
    /// Send a password-reset email.
    Reset {
        #[arg(long)]
        email: String,
    },
    /// Show the current session.
    Session,
    /// Visit a page as a protected page would.
    Protect {
        #[arg(default_value = "dashboard.html")]
        page: String,
    },
    /// Sign out.
    Logout,
}

impl Command {
    /// Page the command runs on, as the browser would be.
    fn page<'a>(&'a self, pages: &'a SitePages) -> &'a str {
        match self {
            Self::Login { .. } | Self::OauthUrl { .. } | Self::Reset { .. } => &pages.login,
            Self::Register { .. } => &pages.register,
            Self::Recover { .. } | Self::Logout => &pages.dashboard,
            Self::Session => &pages.landing,
            Self::Protect { page } => page,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = SupabaseConfig::new(&cli.supabase_url, &cli.anon_key);
    config.timeouts = AuthTimeouts { request_secs: cli.request_timeout, connect_secs: cli.connect_timeout };
    let pages = SitePages::from_env();
    let location = page_url(&cli.site_url, cli.command.page(&pages));

    let identity = SupabaseAuth::new(config, FileSessionStore::new(&cli.session_file))?;
    let sync = Rc::new(SessionSynchronizer::new(
        identity,
        TerminalRenderer::new(&location),
        MemoryRedirectStore::new(),
        pages,
    ));

    let context = AuthContext::start(Rc::clone(&sync)).await;
    let listener = context.listener();
    let result = run_command(&sync, cli.command).await;
    context.shutdown();
    listener.await;
    result
}

async fn run_command(sync: &CliSync, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let session = sync.login_with_email(&email, &password).await?;
            sync.enter_dashboard();
            print_session(&session)
        }
        Command::Register { email, password, full_name, metadata } => {
            let metadata = build_metadata(full_name.as_deref(), metadata.as_deref())?;
            match sync.register_with_email(&email, &password, metadata).await? {
                Registration::SignedIn(session) => {
                    sync.enter_dashboard();
                    print_session(&session)
                }
                Registration::ConfirmationPending(user) => {
                    println!("confirmation email sent to {}", user.email.as_deref().unwrap_or(&email));
                    Ok(())
                }
            }
        }
        Command::OauthUrl { provider } => {
            sync.login_with_oauth(&OAuthProvider::from(provider.as_str())).await?;
            Ok(())
        }
        Command::Recover { fragment } => match sync.identity().recover_session_from_url(&fragment).await? {
            Some(session) => print_session(&session),
            None => {
                println!("no tokens in fragment");
                Ok(())
            }
        },
        Command::Reset { email } => {
            sync.reset_password(&email).await?;
            println!("reset email sent to {email}");
            Ok(())
        }
        Command::Session => match sync.identity().get_session().await? {
            Some(session) => print_session(&session),
            None => Err(CliError::SignedOut),
        },
        Command::Protect { .. } => match sync.protect_private_page().await {
            Some(session) => print_session(&session),
            None => Err(CliError::SignedOut),
        },
        Command::Logout => {
            sync.logout().await;
            Ok(())
        }
    }
}

/// Sign-up metadata: the JSON object from `--metadata`, with `full_name`
/// set from `--full-name` when given.
fn build_metadata(full_name: Option<&str>, raw: Option<&str>) -> Result<Map<String, Value>, CliError> {
    let mut metadata = match raw {
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            _ => return Err(AuthError::Validation("metadata must be a JSON object".to_owned()).into()),
        },
        None => Map::new(),
    };
    if let Some(name) = full_name.map(str::trim).filter(|n| !n.is_empty()) {
        metadata.insert("full_name".to_owned(), Value::String(name.to_owned()));
    }
    Ok(metadata)
}

fn print_session(session: &Session) -> Result<(), CliError> {
    let summary = serde_json::json!({
        "user_id": session.user_id(),
        "email": session.email(),
        "expires_at": session.expires_at,
        "user_metadata": session.user.user_metadata,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
