//! CLI tool for inspecting RTF documents.
//!
//! Prints the plain text of each input, or the full document model
//! (character set, font table and styled runs) as YAML.
//!
//! # Usage
//!
//! Plain text:
//! ```sh
//! cargo run --example dump_rtf -- letter.rtf
//! ```
//!
//! YAML dump with nested groups inheriting formatting:
//! ```sh
//! cargo run --example dump_rtf -- letter.rtf --format yaml --inherit
//! ```

use clap::{Parser, ValueEnum};
use rtfdoc::common::{decode_text, is_rtf};
use rtfdoc::rtf::{CharacterSet, ParserOptions, RtfDocument, ScopeInheritance};
use std::fs;
use std::path::{Path, PathBuf};

/// Dump the contents of RTF documents
#[derive(Parser, Debug)]
#[command(
    name = "dump_rtf",
    about = "Print the text or the parsed structure of RTF documents",
    version
)]
struct Args {
    /// Input file(s) to read
    #[arg(value_name = "INPUT", required = true)]
    input: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Character set for \'hh escapes
    #[arg(long, value_enum, default_value = "ansi")]
    charset: CharsetArg,

    /// Let nested groups start from the enclosing formatting
    #[arg(long)]
    inherit: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Concatenated body text
    Text,
    /// YAML document model
    Yaml,
}

/// Character set options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CharsetArg {
    Ansi,
    Mac,
    Pc,
    Pca,
}

impl From<CharsetArg> for CharacterSet {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Ansi => CharacterSet::Ansi,
            CharsetArg::Mac => CharacterSet::Mac,
            CharsetArg::Pc => CharacterSet::Pc,
            CharsetArg::Pca => CharacterSet::Pca,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let inheritance = if args.inherit {
        ScopeInheritance::Inherit
    } else {
        ScopeInheritance::Reset
    };
    let options = ParserOptions::new()
        .with_scope_inheritance(inheritance)
        .with_charset_hint(args.charset.into());

    let mut error_count = 0;
    for input in &args.input {
        match dump_file(input, options, args.format, args.verbose) {
            Ok(output) => {
                if args.input.len() > 1 {
                    println!("=== {} ===", input.display());
                }
                println!("{}", output);
            },
            Err(e) => {
                error_count += 1;
                eprintln!("✗ {}: {}", input.display(), e);
            },
        }
    }

    if error_count > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Parse a single file and render it in the requested format
fn dump_file(
    input: &Path,
    options: ParserOptions,
    format: FormatArg,
    verbose: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    if !is_rtf(&bytes) {
        eprintln!("warning: {} has no {{\\rtf signature", input.display());
    }

    let text = decode_text(&bytes);
    let doc = RtfDocument::parse_with_options(&text, options)?;

    if verbose {
        eprintln!(
            "  {:?}, {} fonts, {} style blocks",
            doc.charset(),
            doc.font_table().len(),
            doc.body.len()
        );
        for (font_ref, font) in doc.font_table().iter() {
            eprintln!("  \\f{} {:?} {}", font_ref, font.family, font.name);
        }
    }

    Ok(match format {
        FormatArg::Text => doc.text(),
        FormatArg::Yaml => doc.to_yaml()?,
    })
}
