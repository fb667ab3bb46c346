use super::*;
use crate::EXTENSION;
use crate::Error;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

fn open(path: &Path) -> crate::Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::RecordNotFound(path.to_path_buf()))
        }
        Err(e) => Err(malformed(path, e)),
    }
}

fn malformed(path: &Path, e: std::io::Error) -> Error {
    Error::MalformedRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl TournamentRecord {
    /// Unique per tournament number, so parallel writers never collide.
    pub fn filename(&self) -> String {
        format!("tournament_{:06}_seed_{}.{}", self.number, self.seed, EXTENSION)
    }
    /// Writes to a `.part` sibling and renames it into place, so a file with
    /// the final name is always complete.
    pub fn write(&self, dir: &Path) -> crate::Result<PathBuf> {
        let path = dir.join(self.filename());
        let part = path.with_extension(format!("{}.part", EXTENSION));
        let result = File::create(&part)
            .map(BufWriter::new)
            .and_then(|mut w| {
                self.encode(&mut w)?;
                w.flush()?;
                w.get_ref().sync_all()
            })
            .and_then(|_| std::fs::rename(&part, &path));
        match result {
            Ok(()) => Ok(path),
            Err(source) => {
                let _ = std::fs::remove_file(&part);
                Err(Error::SerializationFailure { path, source })
            }
        }
    }
    pub fn read(path: &Path) -> crate::Result<Self> {
        Self::decode(&mut open(path)?).map_err(|e| malformed(path, e))
    }
}

impl Summary {
    /// Reads only the summary block at the head of a record file.
    pub fn read(path: &Path) -> crate::Result<Self> {
        Self::decode(&mut open(path)?).map_err(|e| malformed(path, e))
    }
}

/// Finished record files in a directory, sorted by name.
pub fn records(dir: &Path) -> crate::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::RecordNotFound(dir.to_path_buf()),
        _ => malformed(dir, e),
    })?;
    let mut paths = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
        .collect::<Vec<PathBuf>>();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::AiType;

    fn record() -> TournamentRecord {
        TournamentRecord {
            number: 7,
            seed: 99,
            hands_per_level: 5,
            ai_types: vec![AiType::TAG, AiType::LAG],
            finishing_order: vec![2, 1],
            game_eliminated: vec![Some(0), None],
            hands: vec![HandRecord {
                index: 0,
                level: 0,
                small: 25,
                big: 50,
                button: 0,
                stacks: vec![5000, 5000],
                dealt: vec![],
                board: crate::cards::Board::empty(),
                pots: vec![10000],
                actions: vec![],
                deltas: vec![-5000, 5000],
            }],
        }
    }

    #[test]
    fn names_are_deterministic() {
        assert_eq!(record().filename(), "tournament_000007_seed_99.dsr");
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = record().write(dir.path()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("dsr.part").exists());
        assert_eq!(TournamentRecord::read(&path).unwrap(), record());
        assert_eq!(Summary::read(&path).unwrap(), record().summary());
        assert_eq!(records(dir.path()).unwrap(), vec![path]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.dsr");
        assert!(matches!(Summary::read(&path), Err(Error::RecordNotFound(_))));
    }

    #[test]
    fn garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.dsr");
        std::fs::write(&path, b"not a record").unwrap();
        assert!(matches!(
            Summary::read(&path),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn unwritable_directory_fails_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(matches!(
            record().write(&missing),
            Err(Error::SerializationFailure { .. })
        ));
    }

    #[test]
    fn listing_distinguishes_missing_from_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            records(&dir.path().join("absent")),
            Err(Error::RecordNotFound(_))
        ));
        let file = dir.path().join("plain.dsr");
        std::fs::write(&file, b"").unwrap();
        assert!(matches!(
            records(&file),
            Err(Error::MalformedRecord { .. })
        ));
    }
}
