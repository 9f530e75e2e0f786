use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::fs;
use std::path::Path;

use crate::error::GroupError;
use crate::team::Team;

// A roster line, either a CSV row with a name,key,rating header or an object in a JSON array.
// Ratings come in as numbers or numeric strings.
#[derive(Deserialize, Debug)]
pub struct RosterEntry {
    pub name: String,
    pub key: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub rating: i32,
}

impl From<RosterEntry> for Team {
    fn from(entry: RosterEntry) -> Self {
        Team::new(&entry.name, &entry.key, entry.rating.clamp(0, 100))
    }
}

// Picks the parser by extension. Anything that isn't .json is read as CSV.
pub fn load_roster(file_path: &Path) -> Result<Vec<Team>, GroupError> {
    let data = fs::read_to_string(file_path)?;

    let is_json = file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        roster_from_json(&data)
    } else {
        roster_from_csv(&data)
    }
}

pub fn roster_from_csv(data: &str) -> Result<Vec<Team>, GroupError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut teams = Vec::new();
    for record in reader.deserialize() {
        let entry: RosterEntry = record?;
        teams.push(Team::from(entry));
    }

    Ok(teams)
}

pub fn roster_from_json(data: &str) -> Result<Vec<Team>, GroupError> {
    let entries: Vec<RosterEntry> = serde_json::from_str(data)?;
    Ok(entries.into_iter().map(Team::from).collect())
}

/// Group D of the 1994-95 Champions League.
pub fn default_roster() -> Vec<Team> {
    vec![
        Team::new("AFC Ajax", "AJAX", 90),
        Team::new("Redbull Salzburg", "SALZBURG", 69),
        Team::new("AEK Athens", "AEK", 76),
        Team::new("AC Milan", "MILAN", 88),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_roster_keeps_order() {
        let csv = "name,key,rating\nAFC Ajax, AJAX, 90\nAC Milan,MILAN,88\n";
        let teams = roster_from_csv(csv).unwrap();

        assert_eq!(teams, vec![
            Team::new("AFC Ajax", "AJAX", 90),
            Team::new("AC Milan", "MILAN", 88),
        ]);
    }

    #[test]
    fn json_roster_accepts_string_ratings() {
        let json = r#"[{"name":"AEK Athens","key":"AEK","rating":"76"},{"name":"Redbull Salzburg","key":"SALZBURG","rating":69}]"#;
        let teams = roster_from_json(json).unwrap();

        assert_eq!(teams[0].rating, 76);
        assert_eq!(teams[1].key, "SALZBURG");
    }

    #[test]
    fn ratings_are_clamped() {
        let teams = roster_from_csv("name,key,rating\nGiants,GIANTS,140\nNobodies,NOBODY,-5\n").unwrap();
        assert_eq!(teams[0].rating, 100);
        assert_eq!(teams[1].rating, 0);
    }

    #[test]
    fn bad_rows_are_errors() {
        assert!(matches!(roster_from_csv("name,key,rating\nAjax,AJAX,strong\n"), Err(GroupError::Csv(_))));
        assert!(matches!(roster_from_json("{\"name\": 1}"), Err(GroupError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_roster(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(GroupError::Io(_))));
    }

    #[test]
    fn default_roster_is_group_d() {
        let keys: Vec<String> = default_roster().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["AJAX", "SALZBURG", "AEK", "MILAN"]);
    }
}
