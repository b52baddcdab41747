use super::theme::OneDark;
use anyhow::Result;
use eventdate_core::{ParsedDate, dates::format_date_iso, render::format_date};
use serde::Serialize;
use termimad::{
    MadSkin,
    crossterm::style::Stylize,
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::result_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %d %b %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    /// Status messages go to stderr when colors are off, so piped output stays parseable.
    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }

    pub fn print_result(&self, input: &str, parsed: &ParsedDate) {
        if self.opts.short_mode {
            self.print_result_line(parsed);
            return;
        }

        let (date, iso) = match parsed.date {
            Some(d) => (format_date(d, &self.opts.date_format), format_date_iso(d)),
            None => ("-".to_string(), "-".to_string()),
        };
        let phrase = if parsed.relative_text.is_empty() {
            "-"
        } else {
            parsed.relative_text.as_str()
        };

        if self.opts.use_color {
            let md = format!(
                "## {}\n**{date}** `{iso}` *{phrase}*\n",
                input.trim(),
            );
            self.print_md(&md);
            println!("{}", OneDark::paint_urgency(parsed.urgency));
            self.print_md("---");
        } else {
            println!("input: {}", input.trim());
            println!("date: {date} ({iso})");
            println!("phrase: {phrase}");
            println!("urgency: {}", parsed.urgency);
            println!("---");
        }
    }

    /// `2025-08-29 This Month - in two weeks`
    pub fn print_result_line(&self, parsed: &ParsedDate) {
        let mut date = parsed
            .date
            .map(format_date_iso)
            .unwrap_or_else(|| "-".to_string());
        let mut urgency = parsed.urgency.to_string();
        let mut phrase = parsed.relative_text.to_string();
        if self.opts.use_color {
            date = date.with(OneDark::ISO_DATE).to_string();
            urgency = OneDark::paint_urgency(parsed.urgency);
            phrase = phrase.with(OneDark::PHRASE).to_string();
        }
        if parsed.date.is_some() {
            println!("{} {} - {}", date, urgency, phrase);
        } else {
            println!("{} {}", date, urgency);
        }
    }
}

