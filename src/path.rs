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

use std::fmt;

const SEPARATOR: char = '/';

/// A '/'-separated path inside a connection. Kept verbatim, never normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GnomeCmdPath(String);

impl GnomeCmdPath {
    pub fn new(path: &str) -> Self {
        Self(path.to_owned())
    }

    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    pub fn path(&self) -> String {
        self.0.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GnomeCmdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Appends `path` to `base` with exactly one separator between them.
pub fn append_path(base: &str, path: &str) -> String {
    let path = path.trim_start_matches(SEPARATOR);
    if path.is_empty() {
        return if base.is_empty() {
            SEPARATOR.to_string()
        } else {
            base.to_owned()
        };
    }
    let base = base.trim_end_matches(SEPARATOR);
    format!("{base}{SEPARATOR}{path}")
}
