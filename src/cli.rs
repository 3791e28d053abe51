use std::path::PathBuf;
use clap::Parser;
use crate::constants::*;

#[derive(Parser, Debug)]
#[command(name = "raffle")]
#[command(about = "Draw a random winner from a list of names")]
pub struct Cli {
    #[arg(long, help = "Initial participant list, one name per line")]
    pub names: Option<PathBuf>,
    #[arg(long, help = "Draw animation length in seconds", default_value_t = ANIMATION_DURATION)]
    pub duration: f32,
    #[arg(long, help = "Remove each winner from the list", default_value_t = false)]
    pub remove_winner: bool,
    #[arg(long, help = "Background image", default_value = DEFAULT_BACKGROUND)]
    pub background: PathBuf,
    #[arg(long, help = "Heading shown above the draw box", default_value_t = String::from(DEFAULT_TITLE))]
    pub title: String,
    #[arg(long, help = "Start in fullscreen", default_value_t = false)]
    pub fullscreen: bool,
    #[arg(long, help = "Disable sound effects", default_value_t = false)]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["raffle"]);
        assert_eq!(cli.duration, ANIMATION_DURATION);
        assert!(!cli.remove_winner);
        assert_eq!(cli.background, PathBuf::from("bg.png"));
        assert_eq!(cli.title, "Raffle");
        assert!(cli.names.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "raffle", "--names", "people.txt", "--duration", "4.5", "--remove-winner", "--mute",
        ]);
        assert_eq!(cli.names, Some(PathBuf::from("people.txt")));
        assert_eq!(cli.duration, 4.5);
        assert!(cli.remove_winner);
        assert!(cli.mute);
    }
}
