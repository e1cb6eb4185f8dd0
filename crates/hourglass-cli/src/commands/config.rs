use clap::Subcommand;
use hourglass_core::storage::Config;
use hourglass_core::Theme;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Set the default theme
    SetTheme { theme: String },
    /// Set the unlock password
    SetPassword { password: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetTheme { theme } => {
            let theme: Theme = theme.parse()?;
            let mut cfg = Config::load_or_default();
            cfg.ui.theme = theme;
            cfg.save()?;
        }
        ConfigAction::SetPassword { password } => {
            let mut cfg = Config::load_or_default();
            cfg.auth.password = password;
            cfg.save()?;
        }
    }
    Ok(())
}
