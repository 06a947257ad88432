/*
 * Copyright 2024 Andrey Kutejko <andy128k@gmail.com>
 *
 * This program is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program; if not, see <http://www.gnu.org/licenses/>.
 *
 * For more details see the file COPYING.
 */

use gio::prelude::*;
use std::path::PathBuf;

const ROOT_INFO_ATTRIBUTES: &str = "standard::*,standard::fast-content-type";

/// Metadata of a connection root, detached from GIO so it can cross threads.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfoSnapshot {
    pub name: PathBuf,
    pub display_name: String,
    pub file_type: gio::FileType,
    pub content_type: Option<String>,
    pub fast_content_type: Option<String>,
    pub size: i64,
    pub is_symlink: bool,
}

impl FileInfoSnapshot {
    pub fn from_file_info(info: &gio::FileInfo) -> Self {
        Self {
            name: info.name(),
            display_name: info.display_name().to_string(),
            file_type: info.file_type(),
            content_type: info.content_type().map(|t| t.to_string()),
            fast_content_type: info
                .attribute_string("standard::fast-content-type")
                .map(|t| t.to_string()),
            size: info.size(),
            is_symlink: info.is_symlink(),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.file_type == gio::FileType::Directory
    }
}

/// Reachability check of a connection root.
///
/// Runs on a worker thread and may block, e.g. on network I/O or while
/// GVfs asks for credentials.
pub trait Probe: Send + Sync {
    fn query_root(
        &self,
        uri: &str,
        cancellable: &gio::Cancellable,
    ) -> Result<FileInfoSnapshot, glib::Error>;
}

/// Probe through GIO. Symbolic links are followed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GioProbe;

impl Probe for GioProbe {
    fn query_root(
        &self,
        uri: &str,
        cancellable: &gio::Cancellable,
    ) -> Result<FileInfoSnapshot, glib::Error> {
        let file = gio::File::for_uri(uri);
        let info = file.query_info(
            ROOT_INFO_ATTRIBUTES,
            gio::FileQueryInfoFlags::NONE,
            Some(cancellable),
        )?;
        Ok(FileInfoSnapshot::from_file_info(&info))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_probe_directory() {
        let dir = tempfile::tempdir().unwrap();
        let uri = gio::File::for_path(dir.path()).uri();

        let info = GioProbe
            .query_root(&uri, &gio::Cancellable::new())
            .unwrap();
        assert!(info.is_directory());
        assert_eq!(info.content_type.as_deref(), Some("inode/directory"));
        assert_eq!(info.name.as_os_str(), dir.path().file_name().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_follows_links() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let uri = gio::File::for_path(&link).uri();
        let info = GioProbe
            .query_root(&uri, &gio::Cancellable::new())
            .unwrap();
        assert!(info.is_directory());
    }

    #[test]
    fn test_probe_missing() {
        let dir = tempfile::tempdir().unwrap();
        let uri = gio::File::for_path(dir.path().join("missing")).uri();

        let error = GioProbe
            .query_root(&uri, &gio::Cancellable::new())
            .unwrap_err();
        assert!(error.matches(gio::IOErrorEnum::NotFound));
    }

    #[test]
    fn test_probe_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let uri = gio::File::for_path(dir.path()).uri();

        let cancellable = gio::Cancellable::new();
        cancellable.cancel();
        let error = GioProbe.query_root(&uri, &cancellable).unwrap_err();
        assert!(error.matches(gio::IOErrorEnum::Cancelled));
    }
}
