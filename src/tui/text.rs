use super::state::{Notice, ScreenState};
use crate::pass::charset::{self, CharacterClass};
use crate::settings::{IndexPolicy, MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, checkbox, slider};

const SLIDER_WIDTH: usize = 30;

/// Key hint printed next to each class toggle.
fn toggle_key(class: CharacterClass) -> char {
    match class {
        CharacterClass::Lowercase => '1',
        CharacterClass::Uppercase => '2',
        CharacterClass::Digit => '3',
        CharacterClass::Symbol => '4',
    }
}

/// Screen order of the toggles. Differs from the concatenation order.
pub const TOGGLE_ORDER: [CharacterClass; 4] = [
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Digit,
    CharacterClass::Symbol,
];

pub fn render_screen(state: &ScreenState, source: &str) -> Frame {
    let mut frame = Frame::new();

    frame.top("Password Generator");
    frame.line("");
    frame.line_split(
        "Password Length",
        &format!("{BOLD}{}{RESET}", state.length()),
    );
    frame.line(&slider(state.length(), MIN_LENGTH, MAX_LENGTH, SLIDER_WIDTH));
    frame.line("");

    for class in TOGGLE_ORDER {
        frame.line_split(
            &format!("{}) {}", toggle_key(class), class.label()),
            &checkbox(state.classes().contains(class)),
        );
    }

    frame.line("");
    frame.rule();
    frame.line_center("Enter) Generate Password  |  r) Reset");
    frame.line_center("\u{2190}/\u{2192}) length  |  1-4) toggle  |  q) quit");
    frame.bottom();

    match state.notice() {
        Some(Notice::Error(msg)) => frame.text(&format!("{RED}{msg}{RESET}")),
        Some(Notice::Info(msg)) => frame.text(&format!("{GREEN}{msg}{RESET}")),
        None => frame.text(""),
    }

    if let Some(password) = state.password() {
        frame.top("");
        frame.line_center("Generated Password");
        frame.line("");
        frame.line_center(&format!("{BOLD}{password}{RESET}"));
        frame.line("");
        frame.line_center("Press c to Copy");
        frame.bottom();
    }

    let policy = match state.config().index_policy {
        IndexPolicy::Floor => "",
        IndexPolicy::Round => " • legacy rounding",
    };
    frame.text(&format!(
        "{DIM}Source: {source} • Alphabet: {} chars{policy}{RESET}",
        charset::size(state.classes())
    ));

    frame
}
