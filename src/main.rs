use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use scoutlog::{
    Error,
    config::Config,
    encode::encode_with_level,
    export::export_all,
    persist::{RecordStore, sqlite::SqliteRecordStore},
    record::CandidateRecord,
    types::{MatchLevel, TeamStation},
    validate::validate,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "scoutlog")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file
    #[arg(short, long, global = true, env = "SCOUTLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database file
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Create the scouting table if it is missing
    Init,
    /// Validate and save one observation
    Add(Form),
    /// Export every saved observation to CSV
    Export {
        /// Directory to write into
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
    /// Show an unsaved observation as a QR code
    Qr {
        #[command(flatten)]
        form: Form,
        /// Also write the code to this PNG file
        #[arg(long)]
        png: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct Form {
    /// Scouter name
    #[arg(long, default_value = "")]
    scouter: String,
    /// Team number
    #[arg(long, default_value = "")]
    team: String,
    /// Match number
    #[arg(long = "match", default_value = "")]
    match_number: String,
    /// Match level (Quals, Semi-finals, Finals)
    #[arg(long, default_value = MatchLevel::UNSET_LABEL)]
    level: String,
    /// Autonomous points
    #[arg(long, default_value = "")]
    auto: String,
    /// Teleoperated points
    #[arg(long, default_value = "")]
    teleop: String,
    /// Endgame points
    #[arg(long, default_value = "")]
    endgame: String,
    /// Team station (Red 1 .. Blue 3)
    #[arg(long, default_value = TeamStation::UNSET_LABEL)]
    station: String,
    /// Comments
    #[arg(long, default_value = "")]
    comments: String,
}

impl From<Form> for CandidateRecord {
    fn from(form: Form) -> Self {
        Self {
            scouter_name: form.scouter,
            team_number: form.team,
            match_number: form.match_number,
            match_level: form.level,
            auto_points: form.auto,
            teleop_points: form.teleop,
            endgame_points: form.endgame,
            team_station: form.station,
            comments: form.comments,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            match err {
                Error::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("SCOUTLOG_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> scoutlog::Result<()> {
    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        cfg.database = database;
    }

    let store = SqliteRecordStore::new(&cfg.database);

    match cli.command {
        Command::Init => {
            store.ensure_schema()?;
            println!("{}", store.path().display());
        }
        Command::Add(form) => {
            store.ensure_schema()?;
            let record = validate(&form.into())?;
            let id = store.insert(&record)?;
            println!("{id}");
        }
        Command::Export { export_dir } => {
            store.ensure_schema()?;
            let dir = export_dir.unwrap_or(cfg.export_dir);
            let path = export_all(&store, &dir)?;
            println!("{}", path.display());
        }
        // Encoding works on the unsaved form and never touches the database.
        Command::Qr { form, png } => {
            let image = encode_with_level(&form.into(), cfg.qr.error_correction)?;
            println!("{}", image.to_terminal_string());
            if let Some(path) = png {
                image.save_png(&path, cfg.qr.module_px)?;
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
