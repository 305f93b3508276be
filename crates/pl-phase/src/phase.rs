//! Phase tags.

use std::fmt;

/// The two phases the diagram models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Liquid,
    Vapor,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Liquid, Phase::Vapor];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Liquid => "liquid",
            Phase::Vapor => "vapor",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Phase::Liquid.to_string(), "liquid");
        assert_eq!(Phase::Vapor.to_string(), "vapor");
    }
}
