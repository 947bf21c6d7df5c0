use clap::Parser;

use cg_core::config::{ConvertConfig, PlaybackConfig};

/// chromaglyph — images et GIF en ASCII truecolor dans le terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image (PNG, JPEG, BMP) ou GIF animé. Les `$VAR` sont expansées.
    pub path: String,

    /// Largeur cible en caractères doubles. 0 = déduite du ratio.
    #[arg(short, long, default_value_t = 0)]
    pub width: u32,

    /// Hauteur cible en lignes. 0 = déduite du ratio.
    #[arg(short = 'H', long, default_value_t = 0)]
    pub height: u32,

    /// Nombre de boucles pour un GIF. <= 0 : aucune frame jouée.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub loops: i64,

    /// Traiter un GIF comme une image fixe (première frame).
    #[arg(long, default_value_t = false)]
    pub still: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Reject arguments clap cannot check on its own.
    ///
    /// # Errors
    /// Returns an error if the path is blank.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.path.trim().is_empty() {
            anyhow::bail!("Chemin vide : fournir une image ou un GIF.");
        }
        Ok(())
    }

    /// Conversion options from the CLI.
    #[must_use]
    pub fn convert_config(&self) -> ConvertConfig {
        ConvertConfig {
            width: self.width,
            height: self.height,
        }
    }

    /// Playback options from the CLI.
    #[must_use]
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig::with_loops(self.loops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_native_single_loop() {
        let cli = Cli::try_parse_from(["chromaglyph", "cat.gif"]).unwrap();
        assert!(cli.convert_config().is_native());
        assert_eq!(cli.playback_config().loops, 1);
        assert!(!cli.still);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn dimensions_and_loops() {
        let cli = Cli::try_parse_from([
            "chromaglyph",
            "$HOME/a.gif",
            "-w",
            "80",
            "-H",
            "20",
            "--loops",
            "-1",
        ])
        .unwrap();
        assert_eq!(cli.path, "$HOME/a.gif");
        assert_eq!(
            cli.convert_config(),
            ConvertConfig {
                width: 80,
                height: 20
            }
        );
        assert_eq!(cli.loops, -1);
    }

    #[test]
    fn missing_path_is_rejected() {
        assert!(Cli::try_parse_from(["chromaglyph"]).is_err());
    }

    #[test]
    fn blank_path_fails_validation() {
        let cli = Cli::try_parse_from(["chromaglyph", "  "]).unwrap();
        assert!(cli.validate().is_err());
    }
}
