use clap::ValueEnum;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use vitrine::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(verbose, cli_color, config, detect_capabilities())
    }

    fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color,
            },
        };

        Self {
            verbose,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}
