//! CLI application logic.
//!
//! Every command goes through the real store, so the file on disk is
//! always the product of the same mutation path the editors use.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use slidekit_editor::TableEditor;
use slidekit_model::{Language, Page, PageType};
use slidekit_render::{render_page, RenderTheme, TextSpan, VisualNode, VisualTree};
use slidekit_store::{ContentStore, JsonFileStore, StatePersistence, StoreState};

/// Output format for previews
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable node dump
    #[default]
    Text,
    /// JSON visual tree for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "slidekit")]
#[command(author, version, about = "Trilingual slide decks from structured content", long_about = None)]
struct Cli {
    /// Presentation file
    #[arg(short, long, default_value = "deck.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new presentation file
    New {
        /// Presentation name
        #[arg(short, long, default_value = "Untitled")]
        name: String,

        /// Category label
        #[arg(short, long, default_value = "general")]
        category: String,
    },

    /// Show presentation metadata
    Info,

    /// List pages in order
    Pages,

    /// Append a page of the given type (e.g. "data-table")
    AddPage {
        /// Page type tag
        page_type: PageType,
    },

    /// Delete a page by its 0-based position
    RemovePage { index: usize },

    /// Move a page to a new 0-based position
    MovePage { index: usize, to: usize },

    /// Set a content field on a page
    Set {
        /// 0-based page position
        index: usize,

        /// Content key (e.g. "title")
        key: String,

        /// Value to write
        value: String,

        /// Language for translatable fields
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },

    /// Import tab-separated rows into a data-table page
    ImportRows {
        /// 0-based page position
        index: usize,

        /// File with tab-separated rows (as pasted from a spreadsheet)
        tsv: PathBuf,

        /// Language the pasted cells fill
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },

    /// Render one page to a visual tree
    Preview {
        /// 0-based page position
        index: usize,

        /// Preview language
        #[arg(short, long, default_value = "en")]
        lang: Language,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Optional TOML theme file
        #[arg(long)]
        theme: Option<PathBuf>,
    },
}

/// Parse arguments and run the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New { name, category } => new_command(&cli.file, &name, &category),
        Commands::Info => info_command(&cli.file),
        Commands::Pages => pages_command(&cli.file),
        Commands::AddPage { page_type } => add_page_command(&cli.file, page_type),
        Commands::RemovePage { index } => remove_page_command(&cli.file, index),
        Commands::MovePage { index, to } => move_page_command(&cli.file, index, to),
        Commands::Set {
            index,
            key,
            value,
            lang,
        } => set_command(&cli.file, index, &key, &value, lang),
        Commands::ImportRows { index, tsv, lang } => {
            import_rows_command(&cli.file, index, &tsv, lang)
        }
        Commands::Preview {
            index,
            lang,
            format,
            theme,
        } => preview_command(&cli.file, index, lang, format, theme.as_deref()),
    }
}

fn open_store(file: &Path) -> Result<ContentStore> {
    if !file.exists() {
        bail!(
            "no presentation at {} (run `slidekit new` first)",
            file.display()
        );
    }
    ContentStore::with_persistence(Box::new(JsonFileStore::new(file)))
        .with_context(|| format!("open presentation {}", file.display()))
}

fn page_at(store: &ContentStore, index: usize) -> Result<Page> {
    store
        .state()
        .presentation
        .pages
        .get(index)
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "page {index} out of range (deck has {} pages)",
                store.state().presentation.pages.len()
            )
        })
}

pub fn new_command(file: &Path, name: &str, category: &str) -> Result<()> {
    if file.exists() {
        bail!("refusing to overwrite {}", file.display());
    }
    let mut slot = JsonFileStore::new(file);
    slot.save(&StoreState::fresh(name, category))
        .with_context(|| format!("write {}", file.display()))?;
    println!("created {} (\"{name}\", 1 page)", file.display());
    Ok(())
}

pub fn info_command(file: &Path) -> Result<()> {
    let store = open_store(file)?;
    let deck = &store.state().presentation;
    println!("name:      {}", deck.name);
    println!("category:  {}", deck.category);
    println!(
        "canvas:    {}x{}",
        deck.dimensions.width, deck.dimensions.height
    );
    println!("pages:     {}", deck.pages.len());
    println!("glossary:  {} terms", deck.glossary.len());
    println!("updated:   {}", deck.metadata.updated_at.to_rfc3339());
    Ok(())
}

pub fn pages_command(file: &Path) -> Result<()> {
    let store = open_store(file)?;
    for page in &store.state().presentation.pages {
        let title = page
            .field("title")
            .map(|f| f.en.clone())
            .unwrap_or_default();
        println!("{:>3}  {:<18} {}", page.order, page.page_type.tag(), title);
    }
    Ok(())
}

pub fn add_page_command(file: &Path, page_type: PageType) -> Result<()> {
    let mut store = open_store(file)?;
    store.add_page(page_type);
    let count = store.state().presentation.pages.len();
    println!("added {} page at position {}", page_type, count - 1);
    Ok(())
}

pub fn remove_page_command(file: &Path, index: usize) -> Result<()> {
    let mut store = open_store(file)?;
    let page = page_at(&store, index)?;
    if !store.delete_page(&page.id) {
        bail!("page {index} could not be removed");
    }
    println!("removed page {index} ({})", page.page_type);
    Ok(())
}

pub fn move_page_command(file: &Path, index: usize, to: usize) -> Result<()> {
    let mut store = open_store(file)?;
    let page = page_at(&store, index)?;
    if !store.move_page(&page.id, to) {
        bail!("cannot move page {index} to {to}");
    }
    println!("moved page {index} to {to}");
    Ok(())
}

pub fn set_command(file: &Path, index: usize, key: &str, value: &str, lang: Language) -> Result<()> {
    let mut store = open_store(file)?;
    let page = page_at(&store, index)?;
    let applied = if page.field(key).is_some() {
        store.update_translatable_field(&page.id, key, lang, value)
    } else {
        store.update_string_field(&page.id, key, value)
    };
    if !applied {
        bail!("could not set {key} on page {index}");
    }
    println!("set {key} [{lang}] on page {index}");
    Ok(())
}

pub fn import_rows_command(file: &Path, index: usize, tsv: &Path, lang: Language) -> Result<()> {
    let mut store = open_store(file)?;
    let page = page_at(&store, index)?;
    if page.page_type != PageType::DataTable {
        bail!("page {index} is {}, not a data table", page.page_type);
    }
    let text = fs::read_to_string(tsv).with_context(|| format!("read {}", tsv.display()))?;

    let mut editor = TableEditor::open(&store, &page.id);
    let count = editor
        .import_pasted(&mut store, &text, lang)
        .context("import rejected")?;
    println!("imported {count} rows into page {index}");
    Ok(())
}

pub fn preview_command(
    file: &Path,
    index: usize,
    lang: Language,
    format: OutputFormat,
    theme_path: Option<&Path>,
) -> Result<()> {
    let store = open_store(file)?;
    let page = page_at(&store, index)?;
    let theme = match theme_path {
        Some(path) => RenderTheme::from_file(path)?,
        None => RenderTheme::default(),
    };
    let tree = render_page(&page, lang, &theme);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputFormat::Text => print!("{}", describe_tree(&tree)),
    }
    Ok(())
}

/// Render a visual tree as an indented text dump
pub fn describe_tree(tree: &VisualTree) -> String {
    let mut out = format!("canvas {}x{}\n", tree.width, tree.height);
    for node in &tree.nodes {
        describe_node(node, 1, &mut out);
    }
    out
}

fn describe_node(node: &VisualNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match node {
        VisualNode::Frame {
            rect,
            fill,
            stroke,
            children,
        } => {
            out.push_str(&format!(
                "{pad}frame ({},{} {}x{})",
                rect.x, rect.y, rect.width, rect.height
            ));
            if let Some(fill) = fill {
                out.push_str(&format!(" fill={fill}"));
            }
            if let Some(stroke) = stroke {
                out.push_str(&format!(" stroke={stroke}"));
            }
            out.push('\n');
            for child in children {
                describe_node(child, depth + 1, out);
            }
        }
        VisualNode::Text {
            rect,
            spans,
            font_size,
            ..
        } => {
            out.push_str(&format!(
                "{pad}text ({},{} {}x{}) {}px \"{}\"\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                font_size,
                spans_to_markup(spans)
            ));
        }
        VisualNode::Image { rect, image_key } => {
            out.push_str(&format!(
                "{pad}image ({},{} {}x{}) key={}\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                image_key.as_deref().unwrap_or("-")
            ));
        }
        VisualNode::Line {
            from, to, dashed, ..
        } => {
            out.push_str(&format!(
                "{pad}line ({},{}) -> ({},{}){}\n",
                from.0,
                from.1,
                to.0,
                to.1,
                if *dashed { " dashed" } else { "" }
            ));
        }
    }
}

/// Reassemble spans into the `**bold**` source form for display
fn spans_to_markup(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|s| {
            if s.bold {
                format!("**{}**", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}
