// Report generation from classification results

use crate::detect::{ClassificationResult, Validity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub root_id: i64,
    pub children: Vec<i64>,
}

impl From<&ClassificationResult> for MenuEntry {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            root_id: result.root_id,
            children: result.children.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuReport {
    pub valid_menus: Vec<MenuEntry>,
    pub invalid_menus: Vec<MenuEntry>,
}

impl MenuReport {
    pub fn total(&self) -> usize {
        self.valid_menus.len() + self.invalid_menus.len()
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Split results into the valid and invalid lists, keeping their order.
pub fn report(results: &[ClassificationResult]) -> MenuReport {
    let mut report = MenuReport::default();
    for result in results {
        match result.validity {
            Validity::Valid => report.valid_menus.push(result.into()),
            Validity::Invalid => report.invalid_menus.push(result.into()),
        }
    }
    report
}
