//! Foodclean CLI - clean the food database export and derive a vegan flag
//!
//! # Main Command
//!
//! ```bash
//! foodclean clean livsmedel.xlsx        # Full pipeline, writes the cleaned CSV
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! foodclean inspect livsmedel.xlsx      # Parse only, show structure
//! foodclean classify --name Kokosmjölk  # Classify one hypothetical item
//! foodclean rules                       # Show the rule sequence and lexicons
//! ```

use clap::{Parser, Subcommand};
use foodclean::{
    read_source, rules_description, run, schema, CleanOptions, RuleSet, SourceFormat, Subject,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "foodclean")]
#[command(about = "Clean the Livsmedelsverket food database export and derive a vegan flag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: load, map, classify, write the cleaned CSV
    Clean {
        /// Input spreadsheet (.xlsx) or delimited text (.csv)
        input: PathBuf,

        /// Output CSV path (default: LivsmedelsDB_Cleaned_Vegan.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of preview rows in the summary
        #[arg(long, default_value = "10")]
        preview_rows: usize,
    },

    /// Parse the source table and report its structure
    Inspect {
        /// Input spreadsheet (.xlsx) or delimited text (.csv)
        input: PathBuf,
    },

    /// Classify a single hypothetical item
    Classify {
        /// Food item name
        #[arg(short, long)]
        name: String,

        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,

        /// Cholesterol in mg, if known
        #[arg(long)]
        cholesterol: Option<f64>,
    },

    /// Show the classification rules and lexicons
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            input,
            output,
            preview_rows,
        } => cmd_clean(&input, output, preview_rows),

        Commands::Inspect { input } => cmd_inspect(&input),

        Commands::Classify {
            name,
            category,
            cholesterol,
        } => cmd_classify(&name, &category, cholesterol),

        Commands::Rules => cmd_rules(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    input: &Path,
    output: Option<PathBuf>,
    preview_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let options = CleanOptions {
        output,
        preview_rows,
    };
    let summary = run(input, &options)?;

    eprintln!("\n📊 {} rows, {} vegan", summary.total, summary.vegan_count);

    if !summary.preview.is_empty() {
        eprintln!("\n   First {} rows:", summary.preview.len());
        for row in &summary.preview {
            eprintln!(
                "   {:<30} {:<25} {}",
                row.name,
                row.category,
                if row.is_vegan { "vegan" } else { "non-vegan" }
            );
        }
    }

    eprintln!("\n✨ Done! Saved as: {}", summary.output_path.display());
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Inspecting: {}", input.display());

    let table = read_source(input)?;

    match &table.format {
        SourceFormat::Workbook { sheet } => eprintln!("   Format: workbook, sheet '{}'", sheet),
        SourceFormat::Delimited {
            encoding,
            delimiter,
        } => eprintln!(
            "   Format: delimited, encoding {}, delimiter '{}'",
            encoding,
            match *delimiter {
                '\t' => "\\t".to_string(),
                c => c.to_string(),
            }
        ),
    }
    eprintln!("   Columns: {}", table.headers.join(", "));
    eprintln!("   Rows: {}", table.rows.len());

    match schema::validate_headers(&table.headers) {
        Ok(()) => eprintln!(
            "✅ All {} required columns present",
            schema::COLUMN_MAP.len()
        ),
        Err(e) => eprintln!("⚠️  {}", e),
    }

    Ok(())
}

fn cmd_classify(
    name: &str,
    category: &str,
    cholesterol: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let subject = Subject::new(name, category, cholesterol);

    match RuleSet::standard().match_subject(&subject) {
        Some(m) => println!("non-vegan ({} rule, matched '{}')", m.rule, m.trigger),
        None => println!("vegan"),
    }

    Ok(())
}

fn cmd_rules() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", rules_description());
    Ok(())
}
