//! Screen state and the transitions that drive it.

use rand::Rng;
use zeroize::Zeroize;

use crate::pass::{self, charset::CharacterClass};
use crate::settings::{
    ClassSet, DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH, snap_length,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Slider moved to a continuous value.
    SetLength(f64),
    /// Length stepped from the keyboard.
    StepLength(i8),
    Toggle(CharacterClass),
    Generate,
    Reset,
    Copied,
    CopyFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Everything the screen shows.
#[derive(Debug)]
pub struct ScreenState {
    config: GenerationConfig,
    password: String,
    generated: bool,
    notice: Option<Notice>,
}

impl ScreenState {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            password: String::new(),
            generated: false,
            notice: None,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.config.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.config.classes
    }

    pub fn password(&self) -> Option<&str> {
        self.generated.then_some(self.password.as_str())
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn apply<R: Rng>(&mut self, action: Action, rng: &mut R) {
        match action {
            Action::SetLength(value) => {
                self.notice = None;
                self.config.length = snap_length(value);
            }
            Action::StepLength(delta) => {
                self.notice = None;
                let stepped = self.config.length as i64 + i64::from(delta);
                self.config.length = stepped.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize;
            }
            Action::Toggle(class) => {
                self.notice = None;
                self.config.classes.toggle(class);
            }
            Action::Generate => match pass::generate(&self.config, rng) {
                Ok(password) => {
                    self.password.zeroize();
                    self.password = password;
                    self.generated = true;
                    self.notice = None;
                }
                Err(e) => {
                    log::warn!("generation rejected: {e}");
                    self.notice = Some(Notice::Error(e.to_string()));
                }
            },
            Action::Reset => {
                log::debug!("screen reset");
                self.password.zeroize();
                self.generated = false;
                self.notice = None;
                self.config.length = DEFAULT_LENGTH;
                self.config.classes = ClassSet::default();
            }
            Action::Copied => {
                self.notice = Some(Notice::Info("Copied to clipboard".to_string()));
            }
            Action::CopyFailed(reason) => {
                self.notice = Some(Notice::Error(reason));
            }
        }
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl Drop for ScreenState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::settings::IndexPolicy;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn starts_at_defaults() {
        let state = ScreenState::default();
        assert_eq!(state.length(), 10);
        assert_eq!(*state.classes(), ClassSet::only(CharacterClass::Lowercase));
        assert!(!state.is_generated());
        assert_eq!(state.password(), None);
    }

    #[test]
    fn set_length_snaps_to_slider_range() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::SetLength(12.6), &mut rng);
        assert_eq!(state.length(), 13);
        state.apply(Action::SetLength(2.0), &mut rng);
        assert_eq!(state.length(), 8);
        state.apply(Action::SetLength(40.0), &mut rng);
        assert_eq!(state.length(), 16);
    }

    #[test]
    fn step_length_clamps() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        for _ in 0..20 {
            state.apply(Action::StepLength(1), &mut rng);
        }
        assert_eq!(state.length(), 16);
        for _ in 0..20 {
            state.apply(Action::StepLength(-1), &mut rng);
        }
        assert_eq!(state.length(), 8);
    }

    #[test]
    fn generate_shows_password_of_current_length() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::SetLength(14.0), &mut rng);
        state.apply(Action::Toggle(CharacterClass::Digit), &mut rng);
        state.apply(Action::Generate, &mut rng);

        let password = state.password().unwrap();
        assert_eq!(password.chars().count(), 14);
        assert!(password.chars().all(|c| "abcedfgjo123456789".contains(c)));
        assert!(state.is_generated());
    }

    #[test]
    fn generate_with_no_classes_reports_and_keeps_previous() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::Generate, &mut rng);
        let first = state.password().unwrap().to_string();

        state.apply(Action::Toggle(CharacterClass::Lowercase), &mut rng);
        state.apply(Action::Generate, &mut rng);

        assert_eq!(state.password(), Some(first.as_str()));
        assert!(matches!(state.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn regenerate_replaces_password() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::Toggle(CharacterClass::Uppercase), &mut rng);
        state.apply(Action::SetLength(16.0), &mut rng);
        state.apply(Action::Generate, &mut rng);
        let first = state.password().unwrap().to_string();
        state.apply(Action::Generate, &mut rng);
        assert_ne!(state.password().unwrap(), first);
    }

    #[test]
    fn reset_restores_every_field() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::SetLength(16.0), &mut rng);
        state.apply(Action::Toggle(CharacterClass::Lowercase), &mut rng);
        state.apply(Action::Toggle(CharacterClass::Uppercase), &mut rng);
        state.apply(Action::Toggle(CharacterClass::Digit), &mut rng);
        state.apply(Action::Toggle(CharacterClass::Symbol), &mut rng);
        state.apply(Action::Generate, &mut rng);
        assert!(state.is_generated());

        state.apply(Action::Reset, &mut rng);

        assert_eq!(state.length(), 10);
        assert_eq!(*state.classes(), ClassSet::only(CharacterClass::Lowercase));
        assert!(!state.is_generated());
        assert_eq!(state.password(), None);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn reset_keeps_index_policy() {
        let config = GenerationConfig::default().with_policy(IndexPolicy::Round);
        let mut state = ScreenState::new(config);
        state.apply(Action::Reset, &mut rng());
        assert_eq!(state.config().index_policy, IndexPolicy::Round);
    }

    #[test]
    fn copy_outcomes_become_notices() {
        let mut state = ScreenState::default();
        let mut rng = rng();
        state.apply(Action::Copied, &mut rng);
        assert!(matches!(state.notice(), Some(Notice::Info(_))));
        state.apply(Action::CopyFailed("no display".into()), &mut rng);
        assert_eq!(
            state.notice(),
            Some(&Notice::Error("no display".to_string()))
        );
        state.apply(Action::StepLength(1), &mut rng);
        assert_eq!(state.notice(), None);
    }
}
