use super::{AppSection, CatalogFile, parse_duration};
use crate::{domain::VideoEntry, entry_signature};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Arc,
};

/// The video catalog: a declarative list of entries read once from
/// `videos.toml`. No scanning, no network; an absent file is an empty
/// catalog plus a first-run hint, never a crash.
pub struct Catalog {
    pub app: AppSection,
    videos: IndexMap<u64, Arc<VideoEntry>>,
    categories: Vec<Arc<String>>,
}

impl Catalog {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::build(CatalogFile::default()));
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).context("Malformed videos.toml")?;
        Ok(Self::build(file))
    }

    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory!")?;
        Ok(base.join("drivestream").join("videos.toml"))
    }

    fn build(file: CatalogFile) -> Self {
        // Categories keep config order; ad-hoc ones from entries append
        fn intern(
            name: &str,
            categories: &mut Vec<Arc<String>>,
            interned: &mut HashMap<String, Arc<String>>,
        ) -> Arc<String> {
            match interned.get(name) {
                Some(c) => Arc::clone(c),
                None => {
                    let cat = Arc::new(name.to_string());
                    interned.insert(name.to_string(), Arc::clone(&cat));
                    categories.push(Arc::clone(&cat));
                    cat
                }
            }
        }

        let mut interned: HashMap<String, Arc<String>> = HashMap::new();
        let mut categories = Vec::new();

        for name in &file.app.categories {
            if name != "All" {
                intern(name, &mut categories, &mut interned);
            }
        }

        let mut videos = IndexMap::with_capacity(file.videos.len());
        for entry in file.videos {
            let id = entry_signature(&entry.url, &entry.title);

            let entry_categories = entry
                .category
                .iter()
                .map(|c| intern(c, &mut categories, &mut interned))
                .collect();

            videos.entry(id).or_insert_with(|| {
                Arc::new(VideoEntry {
                    id,
                    title: entry.title,
                    stream_url: entry.url,
                    categories: entry_categories,
                    duration: entry.duration.as_deref().and_then(parse_duration),
                    resolution: entry.resolution,
                    size: entry.size,
                    featured: entry.featured,
                })
            });
        }

        Catalog {
            app: file.app,
            videos,
            categories,
        }
    }

    pub fn get_all_videos(&self) -> Vec<Arc<VideoEntry>> {
        self.videos.values().cloned().collect()
    }

    pub fn categories(&self) -> &[Arc<String>] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoInfo;
    use std::time::Duration;

    const SAMPLE: &str = r#"
        [app]
        name = "DarkStream"
        categories = ["All", "New", "Other"]
        videos_per_page = 6
        age_gate = true

        [[videos]]
        title = "First"
        url = "~/Videos/first.mp4"
        duration = "12:34"
        category = ["New"]
        featured = true

        [[videos]]
        title = "Second"
        url = "https://files.example/second.mp4"
        resolution = "1080p"
        category = ["Clips"]
    "#;

    #[test]
    fn sample_catalog_round_trips() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();

        assert_eq!(catalog.app.name, "DarkStream");
        assert_eq!(catalog.app.videos_per_page, 6);
        assert!(catalog.app.age_gate);
        assert_eq!(catalog.len(), 2);

        let videos = catalog.get_all_videos();
        assert_eq!(videos[0].get_title(), "First");
        assert_eq!(videos[0].get_duration(), Some(Duration::from_secs(754)));
        assert!(videos[0].is_featured());
        assert!(videos[0].in_category("New"));

        assert_eq!(videos[1].resolution(), Some("1080p"));
        assert_eq!(videos[1].get_duration(), None);
    }

    #[test]
    fn categories_keep_config_order_and_extend_from_entries() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();

        // "All" is implicit, "Clips" comes from an entry
        assert_eq!(names, vec!["New", "Other", "Clips"]);
    }

    #[test]
    fn empty_config_is_an_empty_catalog() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.app.videos_per_page, 12);
    }

    #[test]
    fn duplicate_entries_keep_the_first() {
        let text = r#"
            [[videos]]
            title = "Same"
            url = "/a.mp4"
            featured = true

            [[videos]]
            title = "Same"
            url = "/a.mp4"
        "#;

        let catalog = Catalog::from_toml(text).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get_all_videos()[0].is_featured());
    }
}
