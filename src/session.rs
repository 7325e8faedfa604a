//! Named snapshots of a left/right input pair, persisted as one JSON file.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::input::parse_json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    /// raw text exactly as entered, possibly invalid JSON
    pub left_json: String,
    pub right_json: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<Session>,
}

impl Session {
    /// Parse both sides. A blank side parses as `null`.
    pub fn parse(&self) -> Result<(Value, Value)> {
        let side = |text: &str, label: &str| {
            if text.trim().is_empty() {
                Ok(Value::Null)
            } else {
                parse_json(text, &format!("session {:?} ({label})", self.name))
            }
        };
        Ok((side(&self.left_json, "left")?, side(&self.right_json, "right")?))
    }
}

impl SessionStore {
    /// Open the store at `path`; a missing or blank file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(Error::Io { path, source }),
        };
        let sessions = if text.trim().is_empty() {
            Vec::new()
        } else {
            decode_sessions(&text).map_err(|message| Error::Store { path: path.clone(), message })?
        };
        log::debug!("loaded {} session(s) from {}", sessions.len(), path.display());
        Ok(Self { path, sessions })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Newest first.
    pub fn list(&self) -> Vec<&Session> {
        let mut sessions: Vec<&Session> = self.sessions.iter().collect();
        sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sessions
    }

    /// Look up by id, falling back to the newest session with that name.
    pub fn get(&self, id_or_name: &str) -> Result<&Session> {
        self.sessions
            .iter()
            .find(|session| session.id == id_or_name)
            .or_else(|| self.list().into_iter().find(|session| session.name == id_or_name))
            .ok_or_else(|| Error::SessionNotFound(id_or_name.to_owned()))
    }

    pub fn save(&mut self, name: &str, left_json: &str, right_json: &str) -> Result<&Session> {
        self.save_at(name, left_json, right_json, Utc::now())
    }

    pub fn save_at(
        &mut self,
        name: &str,
        left_json: &str,
        right_json: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<&Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptySessionName);
        }
        if left_json.trim().is_empty() && right_json.trim().is_empty() {
            return Err(Error::EmptySession);
        }
        let id = self.fresh_id(timestamp);
        self.sessions.push(Session {
            id,
            name: name.to_owned(),
            left_json: left_json.to_owned(),
            right_json: right_json.to_owned(),
            timestamp,
        });
        self.persist()?;
        log::info!("saved session {name:?} to {}", self.path.display());
        // just pushed, so never empty
        self.sessions
            .last()
            .ok_or_else(|| Error::SessionNotFound(name.to_owned()))
    }

    pub fn delete(&mut self, id: &str) -> Result<Session> {
        let position = self
            .sessions
            .iter()
            .position(|session| session.id == id)
            .ok_or_else(|| Error::SessionNotFound(id.to_owned()))?;
        let removed = self.sessions.remove(position);
        self.persist()?;
        log::info!("deleted session {:?}", removed.name);
        Ok(removed)
    }

    fn fresh_id(&self, timestamp: DateTime<Utc>) -> String {
        let mut millis = timestamp.timestamp_millis();
        while self.sessions.iter().any(|session| session.id == millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }

    fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.sessions).map_err(|err| Error::Store {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(&self.path, text)
            .map_err(|source| Error::Io { path: self.path.clone(), source })
    }
}

/// Deserialize with the JSON path of the offending element in the message.
fn decode_sessions(text: &str) -> std::result::Result<Vec<Session>, String> {
    let de = &mut serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        format!("at JSON path {path} → {}", err.into_inner())
    })
}
