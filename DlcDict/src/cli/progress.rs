//! Terminal output for `dlcdict extract`

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// The two stages of an extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Expanding directories into .pc files
    Collect,
    /// Decoding dictionaries and writing reports
    Extract,
}

impl Stage {
    const COUNT: usize = 2;

    fn number(self) -> usize {
        match self {
            Self::Collect => 1,
            Self::Extract => 2,
        }
    }

    fn emoji(self) -> Emoji<'static, 'static> {
        match self {
            Self::Collect => LOOKING_GLASS,
            Self::Extract => DISK,
        }
    }
}

/// Print `[n/2] <emoji> message`
pub fn print_stage(stage: Stage, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{}/{}]", stage.number(), Stage::COUNT)).bold().dim(),
        stage.emoji(),
        msg
    );
}

pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Bar counting finished inputs; the message shows the file in flight.
#[must_use]
pub fn extraction_bar(inputs: usize) -> ProgressBar {
    let bar = ProgressBar::new(inputs as u64);
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    bar.set_style(style);
    bar.set_message("Extracting");
    bar
}
