use anyhow::Result;
use clap::Parser;
use koubei_core::{wordbank, Analyzer};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the wordbank directory
    #[arg(short, long, default_value = "wordbank")]
    wordbank: PathBuf,

    /// Expression groups file name inside the wordbank
    #[arg(long, default_value = "expression_groups.json")]
    groups: String,

    /// Sentiment dictionary folder name inside the wordbank
    #[arg(long, default_value = "subjective_dicts")]
    dicts: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("Loading wordbank from {}...", args.wordbank.display());
    let groups = wordbank::load_groups(args.wordbank.join(&args.groups))?;
    let dictionaries = wordbank::load_dictionaries(args.wordbank.join(&args.dicts))?;
    let analyzer = Analyzer::new(groups, dictionaries);

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("请输入评论（q退出）：\n>> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break; // EOF
        }
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("q") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let report = analyzer.analyze(trimmed);
        println!("\n评分结果：");
        println!("{report}");
        println!("{}", "-".repeat(40));
    }

    Ok(())
}
