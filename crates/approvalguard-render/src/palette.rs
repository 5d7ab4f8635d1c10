use owo_colors::OwoColorize;

/// Styles applied by the text renderer.
pub trait Palette {
    fn danger(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn heading(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

/// ANSI escape codes, for terminals.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn danger(&self, text: &str) -> String {
        text.red().bold().to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn heading(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

/// No styling at all; used for `NO_COLOR`, pipes and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn danger(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}
