//! The task store: two ordered lists addressed through one flat index space.

use serde::Deserialize;

use super::error::{Result, TaskError};

/// How many tasks `list` shows when no count is given.
pub const DEFAULT_LIST_COUNT: usize = 3;

/// Document marker separating the two lists in the task file.
const DOC_SEPARATOR: &str = "---\n";

/// Two ordered task lists: `primary` holds the "now -> soon" queue and
/// `secondary` the "later -> maybe" queue. Position encodes urgency (index 0
/// is the most urgent task of its list), and display/deletion address both
/// lists through a single flat index space, `primary` first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl TaskStore {
    /// Parse the raw two-document YAML representation.
    ///
    /// Blank input and a lone `---` both decode to an empty store. Anything
    /// else must be exactly two documents, each a sequence of strings or an
    /// empty document; a file that doesn't fit that shape is malformed and
    /// must not be overwritten by the caller.
    pub fn load(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut docs: Vec<Option<Vec<String>>> = Vec::new();
        for document in serde_yaml::Deserializer::from_str(raw) {
            let doc = Option::<Vec<String>>::deserialize(document)
                .map_err(|err| TaskError::MalformedStore(err.to_string()))?;
            docs.push(doc);
        }

        let mut docs = docs.into_iter();
        match (docs.next(), docs.next(), docs.next()) {
            (Some(primary), Some(secondary), None) => Ok(Self {
                primary: primary.unwrap_or_default(),
                secondary: secondary.unwrap_or_default(),
            }),
            // A file holding only the document marker: both lists empty.
            (Some(None), None, None) => Ok(Self::default()),
            (Some(Some(_)), None, None) => Err(TaskError::MalformedStore(
                "expected two task lists separated by ---, found one".to_string(),
            )),
            _ => Err(TaskError::MalformedStore(
                "expected exactly two task lists separated by ---".to_string(),
            )),
        }
    }

    /// Render the lists back into the raw representation. `load(dump(s))`
    /// reproduces `s` exactly.
    pub fn dump(&self) -> Result<String> {
        let mut raw = serde_yaml::to_string(&self.primary)?;
        raw.push_str(DOC_SEPARATOR);
        raw.push_str(&serde_yaml::to_string(&self.secondary)?);
        Ok(raw)
    }

    /// Put a task at the front of the primary list: do this before
    /// everything else.
    pub fn add_now(&mut self, desc: &str) -> Result<()> {
        let task = validated(desc)?;
        self.primary.insert(0, task);
        Ok(())
    }

    /// Queue a task at the back of the primary list.
    pub fn add_soon(&mut self, desc: &str) -> Result<()> {
        let task = validated(desc)?;
        self.primary.push(task);
        Ok(())
    }

    /// Put a task at the front of the secondary list.
    pub fn add_later(&mut self, desc: &str) -> Result<()> {
        let task = validated(desc)?;
        self.secondary.insert(0, task);
        Ok(())
    }

    /// Queue a task at the back of the secondary list.
    pub fn add_maybe(&mut self, desc: &str) -> Result<()> {
        let task = validated(desc)?;
        self.secondary.push(task);
        Ok(())
    }

    /// Task at a flat index, `primary` first. No combined list is ever
    /// materialized; the index is mapped onto one of the two lists.
    pub fn get(&self, index: usize) -> Option<&str> {
        if index < self.primary.len() {
            self.primary.get(index).map(String::as_str)
        } else {
            self.secondary
                .get(index - self.primary.len())
                .map(String::as_str)
        }
    }

    /// The task at flat index 0, if any.
    pub fn current(&self) -> Option<&str> {
        self.get(0)
    }

    /// Up to `count` tasks (default 3) with their flat indices, primary
    /// tasks first, spilling into the secondary list once the primary one is
    /// exhausted. `all` returns the whole flattened sequence and ignores
    /// `count`. A count beyond the combined length returns what exists.
    pub fn list(&self, count: Option<usize>, all: bool) -> Vec<(usize, &str)> {
        let take = if all {
            self.len()
        } else {
            count.unwrap_or(DEFAULT_LIST_COUNT)
        };

        self.primary
            .iter()
            .chain(self.secondary.iter())
            .take(take)
            .map(String::as_str)
            .enumerate()
            .collect()
    }

    /// Remove and return the task at a flat index (default 0, the current
    /// task). Later tasks in the same list shift down by one; the other list
    /// is untouched.
    pub fn done(&mut self, index: Option<usize>) -> Result<String> {
        let index = index.unwrap_or(0);
        let len = self.len();
        if index >= len {
            return Err(TaskError::IndexOutOfRange { index, len });
        }

        let task = if index < self.primary.len() {
            self.primary.remove(index)
        } else {
            self.secondary.remove(index - self.primary.len())
        };
        Ok(task)
    }

    /// Combined length of both lists.
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The "now -> soon" list.
    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    /// The "later -> maybe" list.
    pub fn secondary(&self) -> &[String] {
        &self.secondary
    }
}

/// Reject blank descriptions; stored text is otherwise kept verbatim.
fn validated(desc: &str) -> Result<String> {
    if desc.trim().is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    Ok(desc.to_string())
}
