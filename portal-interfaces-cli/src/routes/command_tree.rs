use clap::{Args, Subcommand};

use portal_application::AppState;
use portal_domain::{
    EventId, EventStatus, ProxyEntry, RegistrationId, RegistrationStatus, SiteId, SortDirection,
};

use crate::error::CliError;
use crate::handlers::{admin_handlers, auth_handlers, event_handlers, registration_handlers};
use crate::prompt::{AssumeYes, Terminal};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List events
    Events(EventListArgs),

    /// Register (or update your registration) for an event
    Register(RegisterArgs),

    /// Show your registrations
    Mine,

    /// Sign in; resumes a registration started while signed out
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Staff tools
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommand {
    /// Manage registrations of one event
    Registrations {
        #[command(subcommand)]
        command: AdminRegistrationCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AdminRegistrationCommand {
    /// List registrations of an event
    List(AdminListArgs),

    /// Edit one registration; the ticket count given here is kept as-is
    Edit(AdminEditArgs),

    /// Delete one registration
    Delete {
        #[arg(long = "event", value_parser = parse_event_id)]
        event_id: EventId,
        #[arg(value_parser = parse_registration_id)]
        registration_id: RegistrationId,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Download the filtered registrations as CSV
    Export(AdminFilterArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct EventListArgs {
    /// Free-text search
    #[arg(long)]
    pub q: Option<String>,
    #[arg(long, value_parser = parse_event_status)]
    pub status: Option<EventStatus>,
    #[arg(long, value_parser = parse_site_id)]
    pub site: Option<SiteId>,
    /// Only events that have not started yet
    #[arg(long)]
    pub upcoming: bool,
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long, value_parser = parse_sort_direction)]
    pub sort_dir: Option<SortDirection>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
    /// Print cards as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(value_parser = parse_event_id)]
    pub event_id: EventId,
    /// Register on behalf of someone: `name[,phone[,relation[,note]]]`. Repeat
    /// for each person; your own seat is added automatically.
    #[arg(long = "proxy", value_parser = parse_proxy_entry, conflicts_with = "no_proxy")]
    pub proxies: Vec<ProxyEntry>,
    /// Register only yourself, dropping any stored proxy entries
    #[arg(long)]
    pub no_proxy: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AdminFilterArgs {
    #[arg(long = "event", value_parser = parse_event_id)]
    pub event_id: EventId,
    /// Free-text search over registrant name, email and phone
    #[arg(long)]
    pub q: Option<String>,
    #[arg(long, value_parser = parse_registration_status)]
    pub status: Option<RegistrationStatus>,
}

#[derive(Args, Debug, Clone)]
pub struct AdminListArgs {
    #[command(flatten)]
    pub filters: AdminFilterArgs,
    #[arg(long)]
    pub limit: Option<u32>,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Args, Debug, Clone)]
pub struct AdminEditArgs {
    #[arg(long = "event", value_parser = parse_event_id)]
    pub event_id: EventId,
    #[arg(value_parser = parse_registration_id)]
    pub registration_id: RegistrationId,
    #[arg(long, value_parser = parse_registration_status)]
    pub status: Option<RegistrationStatus>,
    #[arg(long)]
    pub tickets: Option<u32>,
    #[arg(long = "proxy", value_parser = parse_proxy_entry, conflicts_with = "no_proxy")]
    pub proxies: Vec<ProxyEntry>,
    #[arg(long)]
    pub no_proxy: bool,
}

/// Runs one command and returns what should be printed on stdout.
pub async fn dispatch<T: Terminal>(
    state: &AppState,
    command: Command,
    terminal: &T,
) -> Result<String, CliError> {
    match command {
        Command::Events(args) => event_handlers::list_events(state, &args).await,
        Command::Register(args) => registration_handlers::register(state, &args, terminal).await,
        Command::Mine => registration_handlers::my_registrations(state).await,
        Command::Login { email } => auth_handlers::login(state, email, terminal).await,
        Command::Logout => auth_handlers::logout(state).await,
        Command::Whoami => auth_handlers::whoami(state).await,
        Command::Admin {
            command: AdminCommand::Registrations { command },
        } => match command {
            AdminRegistrationCommand::List(args) => admin_handlers::list(state, &args).await,
            AdminRegistrationCommand::Edit(args) => admin_handlers::edit(state, &args).await,
            AdminRegistrationCommand::Delete {
                event_id,
                registration_id,
                yes,
            } => {
                if yes {
                    admin_handlers::delete(state, event_id, registration_id, &AssumeYes).await
                } else {
                    admin_handlers::delete(state, event_id, registration_id, terminal).await
                }
            }
            AdminRegistrationCommand::Export(args) => admin_handlers::export(state, &args).await,
        },
    }
}

pub fn parse_event_id(raw: &str) -> Result<EventId, String> {
    EventId::parse(raw).map_err(|err| format!("invalid event id '{}': {}", raw, err))
}

pub fn parse_registration_id(raw: &str) -> Result<RegistrationId, String> {
    RegistrationId::parse(raw).map_err(|err| format!("invalid registration id '{}': {}", raw, err))
}

pub fn parse_site_id(raw: &str) -> Result<SiteId, String> {
    SiteId::parse(raw).map_err(|err| format!("invalid site id '{}': {}", raw, err))
}

pub fn parse_event_status(raw: &str) -> Result<EventStatus, String> {
    EventStatus::parse(raw).ok_or_else(|| {
        format!("unknown event status '{}', expected Draft, Published or Closed", raw)
    })
}

pub fn parse_registration_status(raw: &str) -> Result<RegistrationStatus, String> {
    RegistrationStatus::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = RegistrationStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown registration status '{}', expected one of {}", raw, known.join(", "))
    })
}

pub fn parse_sort_direction(raw: &str) -> Result<SortDirection, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(format!("sort direction must be asc or desc, got '{}'", raw)),
    }
}

/// `name[,phone[,relation[,note]]]`; empty fields are skipped.
pub fn parse_proxy_entry(raw: &str) -> Result<ProxyEntry, String> {
    let mut fields = raw.splitn(4, ',').map(|field| {
        let field = field.trim();
        (!field.is_empty()).then(|| field.to_string())
    });
    let name = fields
        .next()
        .flatten()
        .ok_or_else(|| "proxy entry needs a name".to_string())?;
    Ok(ProxyEntry {
        name,
        phone: fields.next().flatten(),
        relation: fields.next().flatten().map(|relation| relation.to_lowercase()),
        note: fields.next().flatten(),
    })
}
