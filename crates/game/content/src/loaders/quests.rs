//! Quest catalog loader.

use std::path::Path;

use school_core::{QuestChain, QuestItem, QuestLog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quests available at game start plus the chains that add more later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestCatalog {
    #[serde(default)]
    pub quests: Vec<QuestItem>,
    #[serde(default)]
    pub chains: Vec<QuestChain>,
}

impl QuestCatalog {
    /// Fresh quest log with every catalog quest open.
    pub fn initial_log(&self) -> QuestLog {
        let mut log = QuestLog::default();
        for quest in &self.quests {
            let mut quest = quest.clone();
            quest.completed = false;
            // duplicate numbers in the catalog keep the first entry
            let _ = log.add_safely(quest);
        }
        log
    }
}

/// Loader for the quest catalog from RON files.
pub struct QuestLoader;

impl QuestLoader {
    pub fn load(path: &Path) -> LoadResult<QuestCatalog> {
        let content = read_file(path)?;
        let catalog: QuestCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quests RON {}: {}", path.display(), e))?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use school_core::TargetType;

    use super::*;

    #[test]
    fn loads_quests_and_chains() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                quests: [
                    (id: "pet_cat", title: "[Q01] Pet the cat", target: (target_type: npc, target_id: "cat1")),
                    (id: "dupe", title: "[Q01] Same number", target: (target_type: npc, target_id: "cat2")),
                ],
                chains: [
                    (
                        on: (target_type: npc, target_id: "student1"),
                        add: (id: "find_teacher", title: "[Q03] Find the teacher",
                              details: ["Ask around"], target: (target_type: npc, target_id: "teacher")),
                    ),
                ],
            )"#
        )
        .unwrap();

        let catalog = QuestLoader::load(file.path()).unwrap();
        assert_eq!(catalog.chains.len(), 1);
        assert_eq!(catalog.chains[0].on.target_type, TargetType::Npc);

        let log = catalog.initial_log();
        assert_eq!(log.items().len(), 1);
        assert_eq!(log.items()[0].id, "pet_cat");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(QuestLoader::load(&dir.path().join("quests.ron")).is_err());
    }
}
