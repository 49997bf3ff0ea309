use colored::Colorize;

pub struct Theme {
    pub header: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub song: fn(&str) -> String,
    pub album: fn(&str) -> String,
    pub missing: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            "plain" => Self::plain(),
            _ => {
                tracing::warn!("Unknown theme: {}", name);
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            header: |s| s.bright_magenta().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            song: |s| s.white().to_string(),
            album: |s| s.cyan().italic().to_string(),
            missing: |s| s.bright_white().dimmed().italic().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            header: |s| s.red().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            song: |s| s.bright_white().to_string(),
            album: |s| s.green().italic().to_string(),
            missing: |s| s.bright_yellow().dimmed().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            header: |s| s.blue().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            song: |s| s.black().to_string(),
            album: |s| s.magenta().to_string(),
            missing: |s| s.bright_black().italic().to_string(),
        }
    }

    // No colors; for piping output
    pub fn plain() -> Self {
        Self {
            header: |s| s.to_string(),
            line: |s| s.to_string(),
            song: |s| s.to_string(),
            album: |s| s.to_string(),
            missing: |s| s.to_string(),
        }
    }
}
