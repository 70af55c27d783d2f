use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::store::ContentStore;
use crate::error::{Result, WordWideWebError};
use crate::types::content::{PartOfSpeech, ReadingStories};
use crate::types::language::{LanguageCode, LessonNumber};

pub const PACK_SUFFIX: &str = ".lesson.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackWord {
    pub english: String,
    #[serde(rename = "type")]
    pub part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
}

impl PackWord {
    pub fn new(english: &str, part_of_speech: PartOfSpeech, translation: Option<&str>) -> Self {
        PackWord {
            english: english.to_string(),
            part_of_speech,
            translation: translation.map(str::to_string),
            etymology: None,
        }
    }
}

/// Content for one (language, lesson), stored as `<anything>.lesson.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LessonPack {
    pub language: LanguageCode,
    pub lesson: LessonNumber,
    #[serde(default)]
    pub vocabulary: Vec<PackWord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories: Option<ReadingStories>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub writing_prompts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight_words: Vec<String>,
}

pub fn save_lesson_pack(pack: &LessonPack, file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| WordWideWebError::io(file_path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, pack)?;
    Ok(())
}

pub fn load_lesson_pack(file_path: &Path) -> Result<LessonPack> {
    let file = File::open(file_path).map_err(|e| WordWideWebError::io(file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| WordWideWebError::InvalidPack {
        path: file_path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Lists the lesson packs in `dir`, sorted by file name.
pub fn scan_pack_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut packs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| WordWideWebError::io(dir, e))? {
        let path = entry.map_err(|e| WordWideWebError::io(dir, e))?.path();
        let is_pack = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(PACK_SUFFIX));
        if path.is_file() && is_pack {
            packs.push(path);
        }
    }
    packs.sort();
    Ok(packs)
}

#[derive(Debug, Default)]
pub struct PackLoadReport {
    pub loaded: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Merges every pack in `dir` into `store`. A bad pack is skipped and recorded;
/// only an unreadable directory is an error.
pub fn load_pack_directory(store: &mut ContentStore, dir: &Path) -> Result<PackLoadReport> {
    let mut report = PackLoadReport::default();
    for path in scan_pack_directory(dir)? {
        let merged = load_lesson_pack(&path).and_then(|pack| store.merge_pack(pack));
        match merged {
            Ok(()) => {
                log::info!("Loaded lesson pack {}", path.display());
                report.loaded.push(path);
            }
            Err(e) => {
                log::warn!("Skipping lesson pack {}: {}", path.display(), e);
                report.skipped.push((path, e.to_string()));
            }
        }
    }
    Ok(report)
}
