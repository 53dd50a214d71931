use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only log file that rolls over once it grows past `max_bytes`.
///
/// Backups are named `<file>.1` (newest) through `<file>.<max_backups>`
/// (oldest); anything older is discarded. Every `write` call is treated as
/// one record and is never split across two files.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    file: File,
    size: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RollingFile {
    /// Creates `dir` if needed and opens `dir/file_name` for appending.
    pub fn open(
        dir: impl AsRef<Path>,
        file_name: &str,
        max_bytes: u64,
        max_backups: usize,
    ) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(file_name);
        let file = open_append(&path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            path,
            file,
            size,
            max_bytes,
            max_backups,
        })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn should_roll(&self, incoming: usize) -> bool {
        self.max_bytes > 0 && self.size > 0 && self.size + incoming as u64 >= self.max_bytes
    }

    fn roll_over(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            self.file.set_len(0)?;
            self.size = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;

        self.file = open_append(&self.path)?;
        self.size = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_roll(buf.len()) {
            self.roll_over()?;
        }
        self.file.write_all(buf)?;
        self.size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
