#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use brigada::{
    config::{ConfigStore, JsonConfigStore},
    identity, io, locale,
    model::{Language, ShiftAssignment},
    notification::{prepare_reminder, TextReminder},
    rotation::{calendar_date, Rotation},
    schedule::{day_roster, month_grid, schedule_range},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI du planning tournant des brigades (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de rotation (sinon configuration intégrée)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Langue d'affichage : uk | en (défaut : uk, ou langue de l'hôte pour `whoami`)
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Affectation d'un chef pour une date
    Shift {
        /// YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        /// Rang (0, 1, 2) ou nom du chef
        #[arg(long)]
        supervisor: String,
    },

    /// Affectation de tous les chefs pour une date
    Day {
        #[arg(long)]
        date: Option<String>,
    },

    /// Planning d'un chef sur une période, export optionnel
    Range {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        supervisor: String,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Grille mensuelle d'un chef
    Month {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        supervisor: String,
    },

    /// Salutation et chef présélectionné d'après les données de l'hôte
    Whoami {
        /// Fichier JSON `{"user": {...}}`
        #[arg(long)]
        init_data: String,
        #[arg(long)]
        date: Option<String>,
    },

    /// Générer un rappel texte pour le prochain jour travaillé
    Remind {
        #[arg(long)]
        supervisor: String,
        #[arg(long)]
        today: Option<String>,
        #[arg(long, default_value_t = 7)]
        horizon: u32,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },

    /// Écrire la configuration intégrée dans un fichier
    InitConfig {
        #[arg(long)]
        out: String,
    },
}

fn parse_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid date (expected YYYY-MM-DD): {s}")),
        None => Ok(calendar_date(&Local::now())),
    }
}

/// Rang explicite, nom exact, puis correspondance partielle.
fn resolve_supervisor(rotation: &Rotation, raw: &str) -> Result<usize> {
    if let Ok(idx) = raw.trim().parse::<usize>() {
        rotation.supervisor(idx)?;
        return Ok(idx);
    }
    rotation
        .find_supervisor(raw)
        .or_else(|| identity::match_supervisor(raw, rotation.supervisors()))
        .ok_or_else(|| anyhow::anyhow!("unknown supervisor: {raw}"))
}

fn print_assignment(a: &ShiftAssignment, lang: Language) {
    println!("{}", a.name);
    if a.time.is_empty() {
        println!("{}", locale::rest_hint(lang));
    } else {
        println!("{}", a.time);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let rotation = match &cli.config {
        Some(path) => JsonConfigStore::open(path)?.load()?,
        None => Rotation::builtin().clone(),
    };
    let lang = cli.lang.unwrap_or_default();

    let code = match cli.cmd {
        Commands::Shift { date, supervisor } => {
            let date = parse_date(date.as_deref())?;
            let idx = resolve_supervisor(&rotation, &supervisor)?;
            let a = rotation.compute_shift(date, idx, lang)?;
            println!(
                "{} · {}",
                rotation.supervisor(idx)?.name,
                locale::format_long_date(lang, date)
            );
            print_assignment(&a, lang);
            0
        }
        Commands::Day { date } => {
            let date = parse_date(date.as_deref())?;
            println!("{}", locale::format_long_date(lang, date));
            for e in day_roster(&rotation, date, lang)? {
                println!(
                    "{:<8} {:<10} {}",
                    e.supervisor, e.assignment.name, e.assignment.time
                );
            }
            0
        }
        Commands::Range {
            from,
            to,
            supervisor,
            out_csv,
            out_json,
        } => {
            let from = parse_date(Some(from.as_str()))?;
            let to = parse_date(Some(to.as_str()))?;
            let idx = resolve_supervisor(&rotation, &supervisor)?;
            let entries = schedule_range(&rotation, idx, from, to, lang)?;
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &entries)?;
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, &entries)?;
            }
            // impression compacte
            for e in &entries {
                println!(
                    "{} {} | {} | {}",
                    e.date, e.weekday, e.assignment.name, e.assignment.time
                );
            }
            0
        }
        Commands::Month {
            year,
            month,
            supervisor,
        } => {
            let idx = resolve_supervisor(&rotation, &supervisor)?;
            let grid = month_grid(&rotation, idx, year, month, lang)?;
            print!("{}", grid.render());
            0
        }
        Commands::Whoami { init_data, date } => {
            let raw = std::fs::read_to_string(&init_data)
                .with_context(|| format!("reading {init_data}"))?;
            let init = identity::parse_init_data(&raw)?;
            let sel = identity::resolve_selection(&init, &rotation, cli.lang);
            let date = parse_date(date.as_deref())?;
            let chief = rotation.supervisor(sel.supervisor)?;
            println!("{}", locale::title(sel.language));
            println!(
                "{}",
                locale::greeting(sel.language, &sel.display_name, &chief.name)
            );
            let a = rotation.compute_shift(date, sel.supervisor, sel.language)?;
            print_assignment(&a, sel.language);
            0
        }
        Commands::Remind {
            supervisor,
            today,
            horizon,
            out,
        } => {
            let idx = resolve_supervisor(&rotation, &supervisor)?;
            let today = parse_date(today.as_deref())?;
            match prepare_reminder(
                &rotation,
                idx,
                today,
                i64::from(horizon),
                lang,
                &TextReminder,
            ) {
                Ok(reminder) => {
                    std::fs::write(&out, &reminder.content)
                        .with_context(|| format!("writing {out}"))?;
                    println!(
                        "Reminder generated for {} ({}) on {}",
                        reminder.supervisor, reminder.assignment.name, reminder.date
                    );
                    0
                }
                Err(err) => {
                    eprintln!("{err}");
                    // Code 2 = rien à rappeler
                    2
                }
            }
        }
        Commands::InitConfig { out } => {
            let store = JsonConfigStore::open(&out)?;
            if store.path().exists() {
                bail!("refusing to overwrite existing file: {out}");
            }
            store.save(&rotation)?;
            println!("Rotation config written to {out}");
            0
        }
    };

    std::process::exit(code);
}
