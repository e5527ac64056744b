//! HUD model
//!
//! Two text labels and the game-over overlay. The host mirrors these into
//! whatever it draws with; the core only sets text and visibility.

use crate::sim::format_score;

/// Prefix shown before the session high score
pub const HIGH_SCORE_PREFIX: &str = "Top: ";

/// A text label with visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub visible: bool,
}

impl Label {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Overlay container (visibility only)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub visible: bool,
}

impl Overlay {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone)]
pub struct Hud {
    pub score: Label,
    pub high_score: Label,
    pub game_over: Overlay,
    digits: usize,
}

impl Hud {
    /// Everything hidden until the run starts
    pub fn new(digits: usize) -> Self {
        Self {
            score: Label {
                text: format_score(0, digits),
                visible: false,
            },
            high_score: Label::default(),
            game_over: Overlay::default(),
            digits,
        }
    }

    /// Set and reveal the high score label
    pub fn show_high_score(&mut self, high_score: u32) {
        self.high_score
            .set_text(format!("{}{}", HIGH_SCORE_PREFIX, format_score(high_score, self.digits)));
        self.high_score.show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hud_hidden() {
        let hud = Hud::new(5);
        assert_eq!(hud.score.text, "00000");
        assert!(!hud.score.visible);
        assert!(!hud.high_score.visible);
        assert!(!hud.game_over.visible);
    }

    #[test]
    fn test_high_score_label() {
        let mut hud = Hud::new(5);
        hud.show_high_score(321);
        assert_eq!(hud.high_score.text, "Top: 00321");
        assert!(hud.high_score.visible);
    }
}
