use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use novelsplit::{SplitJob, SplitMode, SplitSummary, DEFAULT_CHAPTER_PATTERN};

#[derive(Parser)]
#[command(
    name = "novelsplit",
    version,
    about = "Split a plain-text novel into multiple files"
)]
struct Cli {
    /// Print the final report as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split into chunks capped at a byte budget
    Size {
        /// Input novel file
        input: PathBuf,
        /// Directory the output files are written into
        #[arg(short, long)]
        output_dir: PathBuf,
        /// Maximum chunk size, in --unit units
        #[arg(short, long)]
        max_size: u64,
        /// Unit for --max-size
        #[arg(short, long, value_enum, default_value_t = SizeUnit::Kb)]
        unit: SizeUnit,
    },
    /// Split into a fixed number of files
    Count {
        /// Input novel file
        input: PathBuf,
        /// Directory the output files are written into
        #[arg(short, long)]
        output_dir: PathBuf,
        /// Number of output files
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        files: u64,
    },
    /// Split at chapter headings matched by a regular expression
    Chapter {
        /// Input novel file
        input: PathBuf,
        /// Directory the output files are written into
        #[arg(short, long)]
        output_dir: PathBuf,
        /// Pattern tested against each line (surrounding whitespace removed)
        #[arg(short, long, default_value = DEFAULT_CHAPTER_PATTERN)]
        pattern: String,
    },
    /// Print a short tutorial for writing chapter patterns
    PatternHelp,
}

#[derive(Clone, Copy, ValueEnum)]
enum SizeUnit {
    Bytes,
    Kb,
    Mb,
}

impl SizeUnit {
    fn to_bytes(self, value: u64) -> u64 {
        match self {
            SizeUnit::Bytes => value,
            SizeUnit::Kb => value * 1024,
            SizeUnit::Mb => value * 1024 * 1024,
        }
    }
}

const PATTERN_HELP: &str = r"Chapter pattern tutorial

The pattern is a regular expression tested against each line of the
novel with surrounding whitespace removed. A matching line starts a new
chapter file.

Common metacharacters:
  .    any single character (except newline)
  \d   a digit (0-9)
  \w   a letter, digit, or underscore
  \s   a whitespace character
  [ ]  any one character inside the brackets
  [^ ] any one character not inside the brackets
  *    previous element, zero or more times
  +    previous element, one or more times
  ?    previous element, zero or one time
  |    alternation: match the left or the right side
  ^    start of line
  $    end of line

Useful character sets:
  [零一二三四五六七八九十百千]   Chinese numerals
  [章回节]                       chapter marker characters
  [上下卷]                       volume marker characters

Common patterns:
  1. Numbered chapter:  第[零一二三四五六七八九十百千\d]+\s*章
     matches 第一章, 第123章, 第一百章 ...
  2. Numbered hui:      第[零一二三四五六七八九十百千\d]+\s*回
     matches 第一回, 第25回, 第一百二十回 ...
  3. Combined:          第[零一二三四五六七八九十百千\d]+\s*[章回节]
     matches 第一章, 第二回, 第三节 ...
  4. Volume heading:    ^[上下卷]\s*第?[零一二三四五六七八九十百千\d]+[章回节]?
     matches 上卷第一章, 下卷第五回, 卷三 ...
  5. Special sections:  ^[序前言后记尾声]$
     matches a line that is exactly one marker character, such as 序

Alternatives can be combined with | into a single pattern; the default
pattern does exactly that.
";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let job = match cli.command {
        Command::PatternHelp => {
            print!("{}", PATTERN_HELP);
            return Ok(());
        }
        Command::Size {
            input,
            output_dir,
            max_size,
            unit,
        } => SplitJob {
            input,
            output_dir,
            mode: SplitMode::Size {
                max_bytes: unit.to_bytes(max_size),
            },
        },
        Command::Count {
            input,
            output_dir,
            files,
        } => SplitJob {
            input,
            output_dir,
            mode: SplitMode::Count {
                files: files as usize,
            },
        },
        Command::Chapter {
            input,
            output_dir,
            pattern,
        } => SplitJob {
            input,
            output_dir,
            mode: SplitMode::Chapter { pattern },
        },
    };

    eprintln!("[split] Reading {}", job.input.display());
    let summary = job.run().context("Failed to split novel")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize report")?
        );
    } else {
        report(&summary);
    }

    Ok(())
}

fn report(summary: &SplitSummary) {
    println!(
        "✓ Split {} ({} lines, {}) into {} files",
        summary.source,
        summary.line_count,
        summary.source_encoding,
        summary.files.len()
    );
    for file in &summary.files {
        match &file.title {
            Some(title) => println!("  {} - {} ({} lines)", file.path, title, file.lines),
            None => println!("  {} ({} lines)", file.path, file.lines),
        }
    }
}
