use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lexis", version, about = "Look up English words in the terminal")]
pub struct Cli {
    /// Word to look up on startup instead of the configured default
    pub term: Option<String>,

    /// Profile to load from the user config folder
    #[arg(long, short, env = "LEXIS_PROFILE", default_value = "main")]
    pub profile: String,

    /// Load this config file instead of a profile
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Look the word up once, print the result and exit
    #[arg(long)]
    pub print: bool,

    /// Never try to play pronunciations
    #[arg(long)]
    pub no_audio: bool,

    /// Create a profile cloned from main and exit
    #[arg(long, value_name = "NAME")]
    pub new_profile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_main_profile() {
        let cli = Cli::try_parse_from(["lexis"]).unwrap();
        assert_eq!(cli.term, None);
        assert_eq!(cli.profile, "main");
        assert!(!cli.print);
        assert!(!cli.no_audio);
        assert_eq!(cli.new_profile, None);
    }

    #[test]
    fn one_shot_lookup() {
        let cli = Cli::try_parse_from(["lexis", "--print", "--no-audio", "serendipity"]).unwrap();
        assert_eq!(cli.term.as_deref(), Some("serendipity"));
        assert!(cli.print);
        assert!(cli.no_audio);
    }

    #[test]
    fn explicit_config_path() {
        let cli = Cli::try_parse_from(["lexis", "-c", "/tmp/lexis.json", "-p", "work"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/lexis.json")));
        assert_eq!(cli.profile, "work");
    }
}
