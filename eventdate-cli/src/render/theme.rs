use eventdate_core::EventUrgency;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

/// OneDark palette, mapped onto the parts of a result.
pub struct OneDark;

impl OneDark {
    /// Skin for the long result block:
    ///
    /// ```text
    /// ## <input>                      header
    /// **<date>** `<iso>` *<phrase>*   date, ISO date, matched phrase
    /// ---
    /// ```
    pub fn result_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(OneDark::FG);

        // the input line
        skin.headers[1].set_fg(OneDark::FG);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.bold.set_fg(OneDark::DATE);
        skin.inline_code.set_fg(OneDark::ISO_DATE);
        skin.inline_code.set_bg(OneDark::BG);
        skin.italic.set_fg(OneDark::PHRASE);

        skin.horizontal_rule.set_fg(OneDark::COMMENT);
        // info box
        skin.table.set_fg(OneDark::PURPLE);

        skin
    }

    /// Hotter colors for sooner dates.
    pub fn urgency_color(urgency: EventUrgency) -> Color {
        match urgency {
            EventUrgency::Immediate => OneDark::RED,
            EventUrgency::ThisWeek => OneDark::YELLOW,
            EventUrgency::ThisMonth => OneDark::BLUE,
            EventUrgency::Future => OneDark::GREEN,
            EventUrgency::NoDate => OneDark::COMMENT,
        }
    }

    pub fn paint_urgency(urgency: EventUrgency) -> String {
        urgency
            .to_string()
            .with(Self::urgency_color(urgency))
            .to_string()
    }

    pub const DATE: Color = OneDark::GREEN;
    pub const ISO_DATE: Color = OneDark::CYAN;
    pub const PHRASE: Color = OneDark::YELLOW;

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x2C,
        b: 0x34,
    }; // #282C34
    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const PURPLE: Color = Color::Rgb {
        r: 0xC6,
        g: 0x78,
        b: 0xDD,
    }; // #C678DD
    pub const CYAN: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sooner_urgencies_get_hotter_colors() {
        assert_eq!(OneDark::urgency_color(EventUrgency::Immediate), OneDark::RED);
        assert_eq!(OneDark::urgency_color(EventUrgency::ThisWeek), OneDark::YELLOW);
        assert_eq!(OneDark::urgency_color(EventUrgency::NoDate), OneDark::COMMENT);
    }

    #[test]
    fn painted_urgency_keeps_its_label() {
        let painted = OneDark::paint_urgency(EventUrgency::ThisMonth);
        assert!(painted.contains("This Month"));
    }
}
