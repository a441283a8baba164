use serde::{Deserialize, Serialize};

/// One menu record as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub child_ids: Vec<i64>,
}

impl Menu {
    pub fn new(id: i64, child_ids: Vec<i64>) -> Self {
        Self {
            id,
            data: String::new(),
            parent_id: None,
            child_ids,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u32,
}

impl Pagination {
    /// Number of pages needed to cover `total` records, or `None` when
    /// `per_page` is zero and there is something to page through.
    pub fn pages_needed(&self) -> Option<u32> {
        if self.total == 0 {
            return Some(0);
        }
        if self.per_page == 0 {
            return None;
        }
        Some(self.total.div_ceil(self.per_page))
    }
}

/// A single decoded page response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub menus: Vec<Menu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl PageEnvelope {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self {
            menus,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, current_page: u32, per_page: u32, total: u32) -> Self {
        self.pagination = Some(Pagination {
            current_page,
            per_page,
            total,
        });
        self
    }
}
