use serde::Deserialize;

/// One person as returned by `/live_data` and `/filter`.
///
/// The server sends its whole row, so unknown columns (such as its own
/// `image` field) are ignored here.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PersonRecord {
    pub entity_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub forename: Option<String>,
    #[serde(default)]
    pub nationalities: Option<Vec<String>>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

impl PersonRecord {
    /// Nationalities as the browser prints an array: comma separated, no spaces.
    pub fn nationalities_text(&self) -> String {
        self.nationalities
            .as_ref()
            .map(|list| list.join(","))
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ResultSet {
    #[serde(rename = "data")]
    pub records: Vec<PersonRecord>,
    // Missing from some filter responses
    #[serde(default)]
    pub total_people: Option<u64>,
}

impl ResultSet {
    pub fn filtered_count(&self) -> usize {
        self.records.len()
    }
}
