use bleedframe::{archive, batch, config, crop, output, session};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// File extensions accepted as source images.
const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "webp"];

#[derive(Parser)]
#[command(name = "bleedframe")]
#[command(about = "Print-export tool for photos: one crop, every output size")]
#[command(long_about = "\
Print-export tool for photos: one crop, every output size

Author where each photo sits inside the print bleed frame, then export the
same composition as print-ready PDFs (A1 + A2 at 300 DPI with 3mm bleed), a
fixed 912x1296 web thumbnail, and a percentage resize of the untouched
original. A batch of images becomes one zip archive.

Workflow:

  bleedframe crop photo.jpg --dx 20 --dy -10 --scale 1.4
      Nudge the photo inside the frame and zoom. Placement is stored in
      bleedframe-session.json; offsets are in on-screen pixels at the
      session's reference width.

  bleedframe crop photo.jpg --name sunset --resize-percentage 50
      Name the outputs and set per-image targets.

  bleedframe status
      Show every authored image with its crop and target selection.

  bleedframe export
      Export all authored images sequentially and write the archive.

Defaults (reference width, archive name, target selection) can be set in an
optional bleedframe.toml next to the session file.")]
#[command(version)]
struct Cli {
    /// Session document holding per-image crop and options
    #[arg(long, default_value = session::DEFAULT_SESSION_FILE, global = true)]
    session: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct CropArgs {
    /// Source image to author
    image: PathBuf,

    /// Set the horizontal offset from frame center (reference-width pixels)
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Set the vertical offset from frame center
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Pan relative to the current position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dx: f64,

    /// Pan relative to the current position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dy: f64,

    /// Set the zoom factor (must be positive)
    #[arg(long)]
    scale: Option<f64>,

    /// Reset placement to centered, unzoomed
    #[arg(long)]
    reset: bool,

    /// Custom base name for this image's outputs
    #[arg(long)]
    name: Option<String>,

    /// Skip the A1/A2 print PDF pair
    #[arg(long)]
    no_pdf: bool,

    /// Skip the fixed web thumbnail
    #[arg(long)]
    no_thumbnail: bool,

    /// Skip the percentage resize
    #[arg(long)]
    no_resize: bool,

    /// Resize percentage (1-100)
    #[arg(long)]
    resize_percentage: Option<u32>,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Images or directories to export; defaults to every authored image
    inputs: Vec<PathBuf>,

    /// Archive file to write (default from bleedframe.toml, else export.zip)
    #[arg(long)]
    archive: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Author an image's placement inside the bleed frame
    Crop(CropArgs),
    /// Export authored images and bundle the results into an archive
    Export(ExportArgs),
    /// Show the session: authored images, crops, target selection
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::Config::load_or_default(Path::new("."))?;

    match cli.command {
        Command::Crop(args) => {
            let mut session =
                session::Session::load_or_new(&cli.session, config.reference_width)?;
            let is_new = session.entry(&args.image).is_none();
            let entry = session.entry_mut(&args.image);
            if is_new {
                entry.options = config.defaults;
            }

            apply_crop_args(entry, &args);
            session.save(&cli.session)?;

            let entry = session.entry(&args.image).unwrap();
            println!(
                "{}: x {:.1}, y {:.1}, scale {:.2}",
                args.image.display(),
                entry.crop.x,
                entry.crop.y,
                entry.crop.scale
            );
        }
        Command::Export(args) => {
            let mut session =
                session::Session::load_or_new(&cli.session, config.reference_width)?;

            // Explicit inputs are added to the session with default state so
            // un-authored images export centered.
            for path in collect_sources(&args.inputs)? {
                let is_new = session.entry(&path).is_none();
                let entry = session.entry_mut(&path);
                if is_new {
                    entry.options = config.defaults;
                }
            }

            let items = session.to_batch_items();
            if items.is_empty() {
                return Err("nothing to export: no authored images and no inputs given".into());
            }

            let results = batch::run_batch(&items, session.reference_width)?;
            let bytes = archive::build_archive(&results)?;

            let archive_path = args
                .archive
                .unwrap_or_else(|| PathBuf::from(&config.archive_name));
            std::fs::write(&archive_path, &bytes)?;

            output::print_export_output(&results);
            println!(
                "==> Archive: {} ({})",
                archive_path.display(),
                output::format_bytes(bytes.len() as u64)
            );
            session.save(&cli.session)?;
        }
        Command::Status => {
            let session = session::Session::load_or_new(&cli.session, config.reference_width)?;
            output::print_status_output(&session);
        }
    }

    Ok(())
}

/// Apply one crop invocation to an entry, routing pans and zooms through
/// the gesture machine so only committed state lands in the session.
fn apply_crop_args(entry: &mut session::SessionEntry, args: &CropArgs) {
    let mut state = if args.reset {
        crop::CropState::new()
    } else {
        entry.crop
    };
    if let Some(x) = args.x {
        state.x = x;
    }
    if let Some(y) = args.y {
        state.y = y;
    }

    let mut editor = crop::CropEditor::from_state(state);
    if args.dx != 0.0 || args.dy != 0.0 {
        editor.begin_drag(0.0, 0.0);
        editor.drag_to(args.dx, args.dy);
        editor.end_drag();
    }
    if let Some(scale) = args.scale {
        editor.zoom_to(scale);
    }
    entry.crop = editor.commit();

    if let Some(name) = &args.name {
        entry.base_name = Some(name.clone());
    }
    if args.no_pdf {
        entry.options.pdf_set = false;
    }
    if args.no_thumbnail {
        entry.options.thumbnail = false;
    }
    if args.no_resize {
        entry.options.resize = false;
    }
    if let Some(percentage) = args.resize_percentage {
        entry.options.resize_percentage = percentage.clamp(1, 100);
    }
}

/// Expand input paths: files pass through, directories are walked for
/// supported image extensions in sorted order.
fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut sources = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| has_source_extension(path))
                .collect();
            sources.append(&mut found);
        } else {
            sources.push(input.clone());
        }
    }
    Ok(sources)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
