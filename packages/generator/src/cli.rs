//! Command-line interface for the generator.
//!
//! The page goes to stdout unless `--output` is given; status lines always
//! go to stderr so the document can be piped.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{
    PageConfig, DEFAULT_PARAGRAPHS_PATH, DEFAULT_STYLESHEET_PATH, DEFAULT_TITLE, PRIMARY_LANG,
};
use crate::error::Result;
use crate::generator::{check_paragraphs, generate_page, GenerateOptions, Summary};
use crate::html::save_html;

/// Konstren generator - Render the bilingual Lithuanian constitution as a static HTML page.
#[derive(Parser)]
#[command(name = "konstren-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page from paragraph data and a stylesheet.
    Generate {
        /// Stylesheet inlined into the page
        #[arg(long, default_value = DEFAULT_STYLESHEET_PATH)]
        stylesheet: PathBuf,

        /// Paragraph data (JSON array)
        #[arg(long, default_value = DEFAULT_PARAGRAPHS_PATH)]
        paragraphs: PathBuf,

        /// Page title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// Document language code
        #[arg(long, default_value = PRIMARY_LANG)]
        lang: String,

        /// Script inlined at the end of the body
        #[arg(long)]
        script: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate paragraph data and print a summary.
    Check {
        /// Paragraph data (JSON array)
        #[arg(long, default_value = DEFAULT_PARAGRAPHS_PATH)]
        paragraphs: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            stylesheet,
            paragraphs,
            title,
            lang,
            script,
            output,
        } => {
            let options = GenerateOptions {
                stylesheet,
                paragraphs,
                script,
                config: PageConfig::new(title, lang)?,
            };
            generate_command(&options, output.as_deref())
        }
        Commands::Check { paragraphs } => check_command(&paragraphs),
    }
}

/// Execute the generate command.
fn generate_command(options: &GenerateOptions, output: Option<&Path>) -> Result<()> {
    let page = generate_page(options)?;

    match output {
        Some(output_file) => {
            save_html(&page.html, output_file)?;
            print_summary(&page.summary);
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                output_file.display()
            );
        }
        None => println!("{}", page.html),
    }

    Ok(())
}

/// Execute the check command.
fn check_command(paragraphs: &Path) -> Result<()> {
    eprintln!(
        "{} {}",
        style("Checking").bold(),
        style(paragraphs.display()).cyan()
    );
    let summary = check_paragraphs(paragraphs)?;
    print_summary(&summary);
    eprintln!("{}", style("OK").green().bold());
    Ok(())
}

fn print_summary(summary: &Summary) {
    eprintln!("  Chapters: {}", summary.chapters);
    eprintln!("  Articles: {}", summary.articles);
    eprintln!("  Lines: {}", summary.lines);
    if summary.untranslated > 0 {
        eprintln!(
            "  Untranslated: {}",
            style(summary.untranslated).yellow().bold()
        );
    }
}
