// QRGrid CLI - headless grid and QR picker operations
//
// Every mutating command runs through a Session so the grid/proxy
// synchronization contract is the only write path.

mod qr;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use qrgrid_config::Settings;
use qrgrid_core::render::render_item;
use qrgrid_core::session::Session;
use qrgrid_engine::coord::Coord;
use qrgrid_engine::{GRID_COLS, GRID_ROWS};
use qrgrid_io::snapshot;

use qr::TermRenderer;

#[derive(Parser)]
#[command(name = "qgrid")]
#[command(about = "Named QR code lists in a grid (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sheets in a snapshot document (first listed becomes active)
    Sheets {
        /// Snapshot document
        file: PathBuf,
    },

    /// Print the non-empty cells of a sheet
    Show {
        /// Snapshot document
        file: PathBuf,

        /// Sheet name (default: the active sheet)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Print the item projection of a sheet
    #[command(after_help = "\
Items are the non-header rows with at least one of name/content set.
The starred column is the sheet's displayField.")]
    Items {
        /// Snapshot document
        file: PathBuf,

        /// Sheet name (default: the active sheet)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Write one cell and save the document back
    Set {
        /// Snapshot document
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Row (0-based; row 0 is reserved for headers)
        row: usize,

        /// Column (0-based)
        col: usize,

        /// Cell text
        text: String,
    },

    /// Append an auto-named sheet and save the document back
    NewSheet {
        /// Snapshot document
        file: PathBuf,
    },

    /// Rename a sheet and save the document back
    Rename {
        /// Snapshot document
        file: PathBuf,

        /// Current sheet name
        old: String,

        /// New sheet name
        new: String,
    },

    /// Render an item's content as a QR code in the terminal
    #[command(after_help = "\
Examples:
  qgrid qr fy.json --sheet Devices
  qgrid qr fy.json --sheet Devices --index 2 --fullscreen")]
    Qr {
        /// Snapshot document
        file: PathBuf,

        /// Sheet name (default: the active sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// Item index within the sheet's projection (0-based)
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Render at the fullscreen size
        #[arg(long)]
        fullscreen: bool,
    },

    /// Re-emit a document in canonical form (sorted keys, headers dropped)
    Export {
        /// Snapshot document
        file: PathBuf,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

/// Load a document into a fresh session.
///
/// An explicitly named file is a manual action: every load error is loud
/// and aborts the command with the file untouched. The best-effort
/// bootstrap path is the embedding application's concern, not the CLI's.
fn open_session(file: &PathBuf) -> Result<Session, String> {
    let mut session = Session::new();
    let sheets = snapshot::read_document(file).map_err(|e| e.to_string())?;
    session.replace_all(sheets).map_err(|e| e.to_string())?;
    Ok(session)
}

fn select_sheet(session: &mut Session, sheet: Option<&str>) -> Result<(), String> {
    if let Some(name) = sheet {
        session.switch_sheet(name).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Sheets { file } => {
            let session = open_session(&file)?;
            let active = session.active_sheet_name().to_string();
            for name in session.sheet_names() {
                let marker = if name == active { "*" } else { " " };
                println!("{marker} {name}");
            }
            Ok(())
        }

        Commands::Show { file, sheet } => {
            let mut session = open_session(&file)?;
            select_sheet(&mut session, sheet.as_deref())?;

            let active = session.workbook().active_sheet();
            let mut entries: Vec<(Coord, &str)> =
                active.entries().filter(|(_, v)| !v.is_empty()).collect();
            entries.sort_by_key(|(coord, _)| *coord);

            println!("[{}]", active.name);
            for (coord, text) in entries {
                println!("{:>6}  {}", coord.to_string(), text);
            }
            Ok(())
        }

        Commands::Items { file, sheet } => {
            let mut session = open_session(&file)?;
            select_sheet(&mut session, sheet.as_deref())?;

            let active = session.workbook().active_sheet();
            for (i, item) in active.items().iter().enumerate() {
                let label = item.label(active.display_field);
                println!("{i:>3}  {label}");
            }
            Ok(())
        }

        Commands::Set {
            file,
            sheet,
            row,
            col,
            text,
        } => {
            if row >= GRID_ROWS || col >= GRID_COLS {
                return Err(format!(
                    "cell ({row},{col}) outside the {GRID_ROWS}x{GRID_COLS} grid"
                ));
            }
            let mut session = open_session(&file)?;
            session.switch_sheet(&sheet).map_err(|e| e.to_string())?;
            session.select(row, col);
            session.edit_via_proxy(&text);
            snapshot::write_document(session.workbook(), &file).map_err(|e| e.to_string())
        }

        Commands::NewSheet { file } => {
            let mut session = open_session(&file)?;
            session.create_sheet();
            println!("{}", session.active_sheet_name());
            snapshot::write_document(session.workbook(), &file).map_err(|e| e.to_string())
        }

        Commands::Rename { file, old, new } => {
            let mut session = open_session(&file)?;
            session.rename_sheet(&old, &new).map_err(|e| e.to_string())?;
            snapshot::write_document(session.workbook(), &file).map_err(|e| e.to_string())
        }

        Commands::Qr {
            file,
            sheet,
            index,
            fullscreen,
        } => {
            let settings = Settings::load();
            let mut session = open_session(&file)?;
            select_sheet(&mut session, sheet.as_deref())?;

            let active = session.workbook().active_sheet();
            let items = active.items();
            let item = items
                .get(index)
                .ok_or_else(|| format!("no item {} on sheet '{}'", index, active.name))?;

            let shown_name = if item.name.is_empty() { "(无名称)" } else { &item.name };
            let shown_content = if item.content.is_empty() { "-" } else { &item.content };
            println!("{shown_name}");
            println!("{shown_content}");

            let size = if fullscreen {
                settings.qr_fullscreen_size_px
            } else {
                settings.qr_size_px
            };
            let mut renderer = TermRenderer::new();
            if !render_item(&mut renderer, item, size) {
                println!("(no content to encode)");
                return Ok(());
            }
            if let Some(err) = renderer.last_error {
                return Err(format!("QR encoding failed: {err}"));
            }
            Ok(())
        }

        Commands::Export { file, output } => {
            let session = open_session(&file)?;
            match output {
                Some(path) => {
                    snapshot::write_document(session.workbook(), &path).map_err(|e| e.to_string())
                }
                None => {
                    let text =
                        snapshot::to_json_string(session.workbook()).map_err(|e| e.to_string())?;
                    println!("{text}");
                    Ok(())
                }
            }
        }
    }
}
