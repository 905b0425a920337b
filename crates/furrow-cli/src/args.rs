use clap::Parser;

/// Furrow, a small text farming game
///
/// Plant and harvest crops, earn gold and pass the days on an inherited
/// farm. Commands are typed one per line once the game starts:
/// `plant <cropName>`, `harvest`, `pass` and `quit`.
#[derive(Parser)]
#[command(version, about, name = "furrow")]
pub struct Args {
    /// Player name. When omitted the game asks for it on startup
    #[arg(long)]
    pub name: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
