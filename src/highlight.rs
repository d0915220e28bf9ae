use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct OutputStyler {
    color_support: ColorSupport,
}

impl Default for OutputStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }

    pub fn greeting(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let greeting_style = Style::builder().foreground(Color::Cyan).bold().build();

        message.style(greeting_style).to_string()
    }
}
