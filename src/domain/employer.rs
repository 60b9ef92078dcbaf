// ============================================================
// Employer clusters — structured work history
// ============================================================
// The clusterer's output. Serialised with the short upper-case
// keys of the classifier labels:
//
//   {"EMPL": "Acme", "TITLS": [{"TITL": "Engineer", "DATE": "2019-2021"}]}
//
// `TITLS` is left out when an employer has no titles, and
// `DATE` is left out when no date could be attached.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    #[serde(rename = "TITL")]
    pub title: String,

    #[serde(rename = "DATE", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TitleRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), date: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCluster {
    #[serde(rename = "EMPL")]
    pub employer: String,

    #[serde(rename = "TITLS", default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<TitleRecord>,
}

impl EmployerCluster {
    pub fn new(employer: impl Into<String>) -> Self {
        Self {
            employer: employer.into(),
            titles:   Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_serialises_with_label_keys() {
        let mut cluster = EmployerCluster::new("Acme");
        cluster.titles.push(TitleRecord {
            title: "Engineer".to_string(),
            date:  Some("2019-2021".to_string()),
        });
        assert_eq!(
            serde_json::to_value(&cluster).unwrap(),
            json!({"EMPL": "Acme", "TITLS": [{"TITL": "Engineer", "DATE": "2019-2021"}]})
        );
    }

    #[test]
    fn test_empty_titles_and_dates_are_omitted() {
        let mut cluster = EmployerCluster::new("Initech");
        assert_eq!(serde_json::to_value(&cluster).unwrap(), json!({"EMPL": "Initech"}));

        cluster.titles.push(TitleRecord::new("Analyst"));
        assert_eq!(
            serde_json::to_value(&cluster).unwrap(),
            json!({"EMPL": "Initech", "TITLS": [{"TITL": "Analyst"}]})
        );
    }
}
