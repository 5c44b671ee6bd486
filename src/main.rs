use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use bkcards::catalog::{self, Category, FONT_OPTIONS};
use bkcards::fields::CardFields;
use bkcards::images;
use bkcards::rendering::svg;
use bkcards::settings::Theme;
use bkcards::{Editor, StudioConfig};

#[derive(Parser)]
#[command(name = "bkcards", version, about = "Basherkella social card studio")]
struct Cli {
    /// Persistent store for settings and the asset gallery
    #[arg(long, global = true, env = "BK_STORE", default_value = ".bkcards.json")]
    store: PathBuf,

    /// Directory exported PNGs are written into
    #[arg(long, global = true, env = "BK_DOWNLOAD_DIR", default_value = ".")]
    out: PathBuf,

    /// Fetch http(s) images referenced by a card during export
    #[arg(long, global = true)]
    remote_images: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List templates, optionally of one category
    Templates { category: Option<Category> },
    /// List selectable headline fonts
    Fonts,
    /// Export a card as PNG
    Render(CardArgs),
    /// Print a card's SVG document
    Svg(CardArgs),
    /// Turn raw text into headline, body and caption
    #[cfg(feature = "remote")]
    Analyze {
        #[arg(long, default_value = "news")]
        category: Category,
        text: String,
    },
    #[command(subcommand)]
    Gallery(GalleryCmd),
    #[command(subcommand)]
    Settings(SettingsCmd),
}

#[derive(clap::Args)]
struct CardArgs {
    #[arg(long, default_value = "news")]
    category: Category,
    /// Template id; the category's default when omitted
    #[arg(long)]
    template: Option<String>,
    /// JSON field set, as produced by `--dump-fields`
    #[arg(long)]
    fields: Option<PathBuf>,
    #[arg(long)]
    headline: Option<String>,
    #[arg(long)]
    body: Option<String>,
    #[arg(long)]
    caption: Option<String>,
    /// Image path, data URI or gallery item id; repeatable
    #[arg(long = "image")]
    images: Vec<String>,
    /// Print the resulting field set as JSON
    #[arg(long)]
    dump_fields: bool,
}

#[derive(Subcommand)]
enum GalleryCmd {
    List,
    Add { path: PathBuf },
    Remove { id: String },
    Clear,
}

#[derive(Subcommand)]
enum SettingsCmd {
    Show,
    /// Set the theme, or toggle it when no value is given
    Theme { theme: Option<Theme> },
    /// Set the custom logo from an image file, or reset it
    Logo {
        path: Option<PathBuf>,
        #[arg(long, conflicts_with = "path")]
        reset: bool,
    },
    DefaultTemplate { category: Category, id: String },
    DefaultFont { id: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        match e.downcast_ref::<bkcards::Error>() {
            Some(err) => eprintln!("{}\n  ({})", err.user_message(), err),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = StudioConfig::from_env();
    config.store_path = Some(cli.store.clone());
    config.download_dir = cli.out.clone();
    config.allow_remote_images = cli.remote_images;

    match cli.command {
        Cmd::Templates { category } => {
            for t in catalog::TEMPLATES.iter().filter(|t| category.map_or(true, |c| t.category == c)) {
                println!("{:<28} {:<8} {}", t.id, t.category, t.label);
            }
        }
        Cmd::Fonts => {
            for f in FONT_OPTIONS {
                println!("{:<14} {}", f.id, f.name);
            }
        }
        Cmd::Render(args) => {
            let mut editor = Editor::open(config)?;
            prepare(&mut editor, &args)?;
            match editor.capture()? {
                Some(out) => println!("{} ({}x{}, sha256 {})", out.path.display(), out.width, out.height, out.digest),
                None => bail!("a capture is already running"),
            }
        }
        Cmd::Svg(args) => {
            let mut editor = Editor::open(config)?;
            prepare(&mut editor, &args)?;
            println!("{}", svg::to_svg(&editor.preview()));
        }
        #[cfg(feature = "remote")]
        Cmd::Analyze { category, text } => {
            let mut editor = Editor::open(config)?;
            editor.switch_category(category);
            let content = editor.analyze(&text)?;
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Cmd::Gallery(cmd) => {
            let mut editor = Editor::open(config)?;
            let gallery = editor.gallery_mut();
            match cmd {
                GalleryCmd::List => {
                    for item in gallery.list() {
                        println!("{}  {}  {} bytes", item.id, item.name, item.data.len());
                    }
                }
                GalleryCmd::Add { path } => {
                    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
                    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                    let mime = images::mime_for_path(&path);
                    let item = gallery.add(&bytes, &name, Some(mime), bkcards::now_ms())?;
                    println!("added {}", item.id);
                }
                GalleryCmd::Remove { id } => {
                    let item = gallery.remove(&id)?;
                    println!("removed {}", item.name);
                }
                GalleryCmd::Clear => gallery.clear()?,
            }
        }
        Cmd::Settings(cmd) => {
            let mut editor = Editor::open(config)?;
            let settings = editor.settings_mut();
            match cmd {
                SettingsCmd::Show => {
                    println!("theme: {}", settings.theme());
                    println!("custom logo: {}", if settings.custom_logo().is_some() { "set" } else { "none" });
                    println!("default font: {}", settings.default_font().name);
                    for c in Category::ALL {
                        println!("default {} template: {}", c, settings.default_template(c).id);
                    }
                }
                SettingsCmd::Theme { theme } => {
                    let theme = match theme {
                        Some(t) => {
                            settings.set_theme(t)?;
                            t
                        }
                        None => settings.toggle_theme()?,
                    };
                    println!("theme: {}", theme);
                }
                SettingsCmd::Logo { path, reset } => {
                    let logo = match (path, reset) {
                        (Some(p), _) => Some(images::file_to_data_uri(&p)?),
                        (None, true) => None,
                        (None, false) => bail!("give a logo image or --reset"),
                    };
                    settings.set_custom_logo(logo)?;
                }
                SettingsCmd::DefaultTemplate { category, id } => settings.set_default_template(category, &id)?,
                SettingsCmd::DefaultFont { id } => settings.set_default_font(&id)?,
            }
        }
    }
    Ok(())
}

/// Load the card described by `args` into the editor.
fn prepare(editor: &mut Editor, args: &CardArgs) -> anyhow::Result<()> {
    match &args.fields {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let fields: CardFields = serde_json::from_str(&text).context("parsing field set")?;
            editor.set_fields(fields);
        }
        None => editor.switch_category(args.category),
    }

    if let Some(story) = editor.fields_mut().story_mut() {
        if let Some(h) = &args.headline {
            story.headline = h.clone();
        }
        if let Some(b) = &args.body {
            story.body = b.clone();
        }
        if let Some(c) = &args.caption {
            story.caption = c.clone();
        }
    } else if args.headline.is_some() || args.body.is_some() || args.caption.is_some() {
        log::warn!("--headline/--body/--caption only apply to news and quote cards");
    }

    for image in &args.images {
        if editor.gallery().get(image).is_some() {
            editor.add_image_from_gallery(image)?;
        } else {
            editor.add_image(image.clone());
        }
    }
    if let Some(id) = &args.template {
        editor.select_template(id)?;
    }
    if args.dump_fields {
        eprintln!("{}", serde_json::to_string_pretty(editor.fields())?);
    }
    Ok(())
}
