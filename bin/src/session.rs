use cmdle_solver::GuessRecord;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk store for the session: a RON file holding the ordered list of
/// recorded guesses.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> SessionStore {
        SessionStore { path }
    }

    /// The default location, next to the user's other dotfiles.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".cmdle-session.ron"),
            None => PathBuf::from(".cmdle-session.ron"),
        }
    }

    /// Loads the recorded history. A store that doesn't exist yet is an
    /// empty session, not an error.
    pub fn load(&self) -> Result<Vec<GuessRecord>, Box<dyn Error>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(ron::from_str(&contents)?)
    }

    /// Appends one record and returns the updated history.
    pub fn append(&self, record: GuessRecord) -> Result<Vec<GuessRecord>, Box<dyn Error>> {
        let mut history = self.load()?;
        history.push(record);
        self.write(&history)?;
        Ok(history)
    }

    /// Removes the session file. Clearing a missing session is a no-op.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }

    // The history is rewritten through a sibling temp file and renamed into
    // place, so an interrupted write can't leave a truncated session.
    fn write(&self, history: &[GuessRecord]) -> Result<(), Box<dyn Error>> {
        let serialized = ron::to_string(&history)?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdle_solver::result_for_guess;
    use std::sync::Arc;

    fn scratch_store(name: &str) -> SessionStore {
        let path = std::env::temp_dir().join(format!(
            "cmdle-session-test-{}-{}.ron",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        SessionStore::new(path)
    }

    fn record(guess: &str, secret: &str) -> GuessRecord {
        GuessRecord::new(Arc::from(guess), result_for_guess(secret, guess).unwrap())
    }

    #[test]
    fn missing_file_is_an_empty_session() {
        let store = scratch_store("missing");

        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn append_then_load_round_trips() {
        let store = scratch_store("append");

        store.append(record("paste", "touch")).unwrap();
        store.append(record("chown", "touch")).unwrap();
        let history = store.load().unwrap();

        assert_eq!(
            history,
            vec![record("paste", "touch"), record("chown", "touch")]
        );
        store.clear().unwrap();
    }

    #[test]
    fn clear_empties_the_session() {
        let store = scratch_store("clear");

        store.append(record("paste", "touch")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), vec![]);
        // Clearing again must not fail.
        store.clear().unwrap();
    }
}
