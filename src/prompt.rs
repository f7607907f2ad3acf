// src/prompt.rs
pub const STANDARD_PROMPT: &str = "You are a helpful AI tutor.";

pub const DEBIAS_PROMPT: &str = "You are an impartial and knowledgeable AI tutor with a deep \
understanding of cultural diversity. When explaining concepts, you actively consider and \
integrate multiple perspectives, such as Eastern and Western viewpoints, avoiding assumptions \
or examples that carry cultural bias. Your goal is to make students from all cultural \
backgrounds feel included and understood.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    Debias,
}

impl Mode {
    /// Anything other than `"debias"` falls back to the standard tutor.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode {
            Some("debias") => Mode::Debias,
            _ => Mode::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Debias => "debias",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mode::Standard => STANDARD_PROMPT,
            Mode::Debias => DEBIAS_PROMPT,
        }
    }
}
