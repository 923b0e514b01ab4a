//! Filter form snapshot and the rule deciding whether it may be submitted.

/// Zero-delay timer for the re-check after a reset: the native form reset
/// only lands once the click handler has returned.
pub const RESET_RECHECK_DELAY_MS: u32 = 0;

/// Selected option of the nationality dropdown.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Nationality {
    /// The disabled placeholder at index 0, or nothing selected at all.
    #[default]
    Unset,
    Selected(String),
}

impl Nationality {
    pub fn from_select(selected_index: i32, value: String) -> Self {
        if selected_index <= 0 || value.is_empty() {
            Nationality::Unset
        } else {
            Nationality::Selected(value)
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Nationality::Unset => "",
            Nationality::Selected(code) => code,
        }
    }
}

/// Values of the four filter fields at the moment they were read.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    pub name: String,
    pub forename: String,
    pub nationality: Nationality,
    pub date_of_birth: String,
}

pub fn should_enable_submit(state: &FormState) -> bool {
    !state.name.trim().is_empty()
        || !state.forename.trim().is_empty()
        || state.nationality != Nationality::Unset
        || !state.date_of_birth.trim().is_empty()
}

impl FormState {
    /// `application/x-www-form-urlencoded` body for `/filter`. Values are
    /// sent as typed, the same way the browser serialises a form.
    pub fn to_form_body(&self) -> String {
        [
            ("name", self.name.as_str()),
            ("forename", self.forename.as_str()),
            ("nationalities", self.nationality.code()),
            ("date_of_birth", self.date_of_birth.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}
