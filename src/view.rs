use crate::models::ValueForm;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Value,
    File,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Value => "value",
            Mode::File => "file",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab {0:?}, expected 'value' or 'file'")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "value" => Ok(Mode::Value),
            "file" => Ok(Mode::File),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Observable state of one input section and its selector button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub visible: bool,
    pub active: bool,
}

/// Everything the page shows. Handlers mutate this instead of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    mode: Mode,
    pub value_inputs: ValueForm,
    pub value_result: String,
    pub file_result: String,
    pub download_token: Option<String>,
    pub location: Option<String>,
}

impl ViewModel {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn switch_tab(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn section(&self, mode: Mode) -> SectionState {
        let shown = self.mode == mode;
        SectionState {
            visible: shown,
            active: shown,
        }
    }

    pub fn result(&self, mode: Mode) -> &str {
        match mode {
            Mode::Value => &self.value_result,
            Mode::File => &self.file_result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Mode; 2] = [Mode::Value, Mode::File];

    #[test]
    fn value_tab_is_active_on_load() {
        let view = ViewModel::default();
        assert_eq!(view.mode(), Mode::Value);
        assert!(view.section(Mode::Value).visible);
        assert!(!view.section(Mode::File).visible);
    }

    #[test]
    fn switch_tab_shows_exactly_one_section() {
        for mode in MODES {
            let mut view = ViewModel::default();
            view.switch_tab(mode);
            let shown: Vec<Mode> = MODES.into_iter().filter(|m| view.section(*m).visible).collect();
            assert_eq!(shown, vec![mode]);
            assert!(view.section(mode).active);
            for other in MODES.into_iter().filter(|m| *m != mode) {
                assert_eq!(view.section(other), SectionState { visible: false, active: false });
            }
        }
    }

    #[test]
    fn switch_tab_is_idempotent() {
        let mut once = ViewModel::new(Mode::File);
        once.switch_tab(Mode::Value);
        let mut twice = once.clone();
        twice.switch_tab(Mode::Value);
        assert_eq!(once, twice);
    }

    #[test]
    fn switching_keeps_rendered_results() {
        let mut view = ViewModel::default();
        view.value_result = "<p>42</p>".to_string();
        view.switch_tab(Mode::File);
        view.switch_tab(Mode::Value);
        assert_eq!(view.result(Mode::Value), "<p>42</p>");
    }

    #[test]
    fn mode_parsing_rejects_unknown_tabs() {
        assert_eq!("value".parse::<Mode>(), Ok(Mode::Value));
        assert_eq!(" file ".parse::<Mode>(), Ok(Mode::File));
        assert_eq!("upload".parse::<Mode>(), Err(UnknownMode("upload".to_string())));
        assert_eq!(Mode::File.to_string(), "file");
    }
}
