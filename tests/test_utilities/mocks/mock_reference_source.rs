use async_trait::async_trait;
use quotedesk::prelude::*;

/// Mock ReferenceDataSource for testing
pub struct MockReferenceSource {
    pub manufacturers: Vec<ReferenceEntry>,
    pub categories: Vec<ReferenceEntry>,
    pub applications: Vec<ReferenceEntry>,
    pub should_fail: bool,
}

impl MockReferenceSource {
    pub fn new() -> Self {
        Self {
            manufacturers: Vec::new(),
            categories: Vec::new(),
            applications: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_manufacturer(mut self, id: i64, name: &str) -> Self {
        self.manufacturers.push(ReferenceEntry {
            id,
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn with_category(mut self, id: i64, name: &str) -> Self {
        self.categories.push(ReferenceEntry {
            id,
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn with_application(mut self, id: i64, name: &str) -> Self {
        self.applications.push(ReferenceEntry {
            id,
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            manufacturers: Vec::new(),
            categories: Vec::new(),
            applications: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockReferenceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferenceDataSource for MockReferenceSource {
    async fn fetch_manufacturers(&self) -> Result<Vec<ReferenceEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock reference source failure");
        }
        Ok(self.manufacturers.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<ReferenceEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock reference source failure");
        }
        Ok(self.categories.clone())
    }

    async fn fetch_applications(&self) -> Result<Vec<ReferenceEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock reference source failure");
        }
        Ok(self.applications.clone())
    }
}
