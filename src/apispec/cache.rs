use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{SPEC_CHECKSUM_RECORD, SPEC_DOCUMENT_RECORD};
use crate::utils::AcliError;

/// Checksum-validated cache for the parsed Cloud API spec.
///
/// The spec file is 20k+ lines of YAML and parsing it on every lookup is
/// slow, so the parsed document is persisted under `cache_dir` as two
/// records: the SHA-256 of the source file, and the document itself
/// (lz4-compressed JSON in a bincode envelope). A cached document is served
/// only while the stored checksum equals the current file checksum; any
/// mismatch or corruption triggers a full re-parse that overwrites both
/// records.
pub struct SpecCache {
    spec_file: PathBuf,
    cache_dir: PathBuf,
    memo: Option<Memo>,
    parses: u64,
    hits: u64,
}

/// In-memory memo for the current process, populated on first load.
struct Memo {
    checksum: String,
    document: Value,
}

/// On-disk document record. The checksum is embedded so a stale document
/// left behind by an interrupted write can never pair with a fresh
/// checksum record.
#[derive(Serialize, Deserialize)]
struct DocumentRecord {
    checksum: String,
    payload: Vec<u8>,
}

/// Snapshot of cache state, for `acli spec status`.
#[derive(Debug)]
pub struct CacheStatus {
    pub spec_file: PathBuf,
    pub cache_dir: PathBuf,
    pub current_checksum: String,
    pub cached_checksum: Option<String>,
    pub valid: bool,
}

impl SpecCache {
    pub fn new(spec_file: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Result<Self, AcliError> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)?;
        Ok(Self {
            spec_file: spec_file.into(),
            cache_dir,
            memo: None,
            parses: 0,
            hits: 0,
        })
    }

    /// Compute the hex SHA-256 of a file's content.
    pub fn hash_file(path: &Path) -> Result<String, AcliError> {
        let content = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&content);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Return the parsed spec document, current with on-disk content.
    ///
    /// Checks the in-memory memo, then the disk records, and only parses
    /// the YAML when neither matches the file's current checksum. A fresh
    /// parse unconditionally overwrites both disk records.
    pub fn load_document(&mut self) -> Result<Value, AcliError> {
        let checksum = Self::hash_file(&self.spec_file)?;

        if let Some(memo) = &self.memo {
            if memo.checksum == checksum {
                self.hits += 1;
                return Ok(memo.document.clone());
            }
        }

        if let Some(document) = self.read_records(&checksum) {
            debug!("API spec cache hit for checksum {checksum}");
            self.hits += 1;
            self.memo = Some(Memo {
                checksum,
                document: document.clone(),
            });
            return Ok(document);
        }

        debug!("API spec cache miss, parsing {}", self.spec_file.display());
        let document = parse_spec_file(&self.spec_file)?;
        self.parses += 1;
        self.write_records(&checksum, &document)?;
        self.memo = Some(Memo {
            checksum,
            document: document.clone(),
        });
        Ok(document)
    }

    /// Remove both on-disk records.
    pub fn clear(&mut self) -> Result<(), AcliError> {
        self.memo = None;
        for record in [SPEC_CHECKSUM_RECORD, SPEC_DOCUMENT_RECORD] {
            let path = self.cache_dir.join(record);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// Describe the cache state without mutating it.
    pub fn status(&self) -> Result<CacheStatus, AcliError> {
        let current_checksum = Self::hash_file(&self.spec_file)?;
        let cached_checksum = fs::read_to_string(self.cache_dir.join(SPEC_CHECKSUM_RECORD))
            .ok()
            .map(|s| s.trim().to_string());
        let valid = cached_checksum.as_deref() == Some(current_checksum.as_str())
            && self.cache_dir.join(SPEC_DOCUMENT_RECORD).exists();
        Ok(CacheStatus {
            spec_file: self.spec_file.clone(),
            cache_dir: self.cache_dir.clone(),
            current_checksum,
            cached_checksum,
            valid,
        })
    }

    /// Number of YAML parses performed by this instance.
    pub fn parse_count(&self) -> u64 {
        self.parses
    }

    /// Number of loads served from the memo or the disk records.
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// Load the document from the disk records, treating every failure
    /// mode (missing record, checksum mismatch, undecodable payload) as
    /// absence.
    fn read_records(&self, checksum: &str) -> Option<Value> {
        let stored = fs::read_to_string(self.cache_dir.join(SPEC_CHECKSUM_RECORD)).ok()?;
        if stored.trim() != checksum {
            return None;
        }

        let raw = fs::read(self.cache_dir.join(SPEC_DOCUMENT_RECORD)).ok()?;
        let record: DocumentRecord = bincode::deserialize(&raw).ok()?;
        if record.checksum != checksum {
            return None;
        }

        let json = lz4::block::decompress(&record.payload, None).ok()?;
        serde_json::from_slice(&json).ok()
    }

    /// Overwrite both disk records. The checksum record is written last:
    /// its presence is what gates validity.
    fn write_records(&self, checksum: &str, document: &Value) -> Result<(), AcliError> {
        let json = serde_json::to_vec(document)?;
        let payload = lz4::block::compress(&json, None, true)?;
        let record = DocumentRecord {
            checksum: checksum.to_string(),
            payload,
        };
        let encoded = bincode::serialize(&record)
            .map_err(|e| AcliError::Cache(format!("failed to encode document record: {e}")))?;

        fs::write(self.cache_dir.join(SPEC_DOCUMENT_RECORD), encoded)?;
        fs::write(self.cache_dir.join(SPEC_CHECKSUM_RECORD), checksum)?;
        Ok(())
    }
}

/// Parse the spec YAML and normalize it into JSON values.
fn parse_spec_file(path: &Path) -> Result<Value, AcliError> {
    let text = fs::read_to_string(path)?;
    let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(&text)?;
    yaml_to_json(yaml)
}

/// Convert a YAML value into its JSON representation.
///
/// OpenAPI status codes parse as YAML integer keys; JSON objects require
/// string keys, so scalar keys are stringified.
fn yaml_to_json(yaml: serde_yaml_ng::Value) -> Result<Value, AcliError> {
    use serde_yaml_ng::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64().and_then(serde_json::Number::from_f64).map(Value::Number).unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect::<Result<_, _>>()?),
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => {
                        return Err(AcliError::Cache(format!(
                            "unsupported mapping key in API spec: {other:?}"
                        )))
                    }
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    const SPEC: &str = r#"
paths:
  /ides/{ideUuid}:
    get:
      responses:
        200:
          content:
            application/json:
              example:
                uuid: abc
"#;

    fn write_spec(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("acquia-spec.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_parses_and_normalizes_status_keys() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let mut cache = SpecCache::new(&spec_file, dir.path().join("cache")).unwrap();

        let doc = cache.load_document().unwrap();
        // YAML integer key 200 must come out as a JSON string key
        assert_eq!(
            doc["paths"]["/ides/{ideUuid}"]["get"]["responses"]["200"]["content"]
                ["application/json"]["example"],
            json!({"uuid": "abc"})
        );
    }

    #[test]
    fn test_second_load_does_not_reparse() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let mut cache = SpecCache::new(&spec_file, dir.path().join("cache")).unwrap();

        let first = cache.load_document().unwrap();
        let second = cache.load_document().unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.parse_count(), 1);
        assert_eq!(cache.hit_count(), 1);
    }

    #[test]
    fn test_fresh_instance_serves_from_disk_without_parsing() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let cache_dir = dir.path().join("cache");

        let mut warm = SpecCache::new(&spec_file, &cache_dir).unwrap();
        let parsed = warm.load_document().unwrap();

        let mut cold = SpecCache::new(&spec_file, &cache_dir).unwrap();
        let cached = cold.load_document().unwrap();

        assert_eq!(parsed, cached);
        assert_eq!(cold.parse_count(), 0);
        assert_eq!(cold.hit_count(), 1);
    }

    #[test]
    fn test_content_change_invalidates_cache() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let mut cache = SpecCache::new(&spec_file, dir.path().join("cache")).unwrap();

        cache.load_document().unwrap();
        fs::write(&spec_file, SPEC.replace("abc", "def")).unwrap();
        let doc = cache.load_document().unwrap();

        assert_eq!(cache.parse_count(), 2);
        assert_eq!(
            doc["paths"]["/ides/{ideUuid}"]["get"]["responses"]["200"]["content"]
                ["application/json"]["example"]["uuid"],
            json!("def")
        );
    }

    #[test]
    fn test_corrupt_document_record_self_heals() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let cache_dir = dir.path().join("cache");

        let mut warm = SpecCache::new(&spec_file, &cache_dir).unwrap();
        warm.load_document().unwrap();
        fs::write(cache_dir.join(SPEC_DOCUMENT_RECORD), b"not bincode").unwrap();

        let mut cold = SpecCache::new(&spec_file, &cache_dir).unwrap();
        cold.load_document().unwrap();
        assert_eq!(cold.parse_count(), 1);

        // The overwritten records are valid again
        let mut next = SpecCache::new(&spec_file, &cache_dir).unwrap();
        next.load_document().unwrap();
        assert_eq!(next.parse_count(), 0);
    }

    #[test]
    fn test_status_reports_validity() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let mut cache = SpecCache::new(&spec_file, dir.path().join("cache")).unwrap();

        let status = cache.status().unwrap();
        assert!(!status.valid);
        assert_eq!(status.cached_checksum, None);

        cache.load_document().unwrap();
        let status = cache.status().unwrap();
        assert!(status.valid);
        assert_eq!(status.cached_checksum, Some(status.current_checksum.clone()));
    }

    #[test]
    fn test_clear_removes_records() {
        let dir = TempDir::new().unwrap();
        let spec_file = write_spec(&dir, SPEC);
        let cache_dir = dir.path().join("cache");
        let mut cache = SpecCache::new(&spec_file, &cache_dir).unwrap();

        cache.load_document().unwrap();
        cache.clear().unwrap();

        assert!(!cache_dir.join(SPEC_CHECKSUM_RECORD).exists());
        assert!(!cache_dir.join(SPEC_DOCUMENT_RECORD).exists());
        assert!(!cache.status().unwrap().valid);
    }
}
