/*
 * Copyright 2001-2006 Marcus Bjurman
 * Copyright 2007-2012 Piotr Eljasiak
 * Copyright 2013-2024 Uwe Scholz
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

use crate::{
    connection::{
        bookmark::Bookmark,
        connection::{Connection, ConnectionExt},
        history::History,
    },
    debug::debug,
    options::ConnectionOptionsRead,
    path::GnomeCmdPath,
    utils::ErrorMessage,
};
use gettextrs::gettext;
use std::cell::RefCell;

/// A directory view onto one connection, with its own navigation history.
pub struct Panel {
    connection: RefCell<Connection>,
    directory: RefCell<Option<GnomeCmdPath>>,
    history: History<String>,
}

impl Panel {
    pub fn new(connection: &Connection, history_size: usize) -> Self {
        Self {
            connection: RefCell::new(connection.clone()),
            directory: Default::default(),
            history: History::new(history_size),
        }
    }

    pub fn connection(&self) -> Connection {
        self.connection.borrow().clone()
    }

    pub fn directory(&self) -> Option<GnomeCmdPath> {
        self.directory.borrow().clone()
    }

    pub fn directory_uri(&self) -> Option<glib::Uri> {
        let directory = self.directory()?;
        self.connection().create_uri(&directory)
    }

    pub fn history(&self) -> &History<String> {
        &self.history
    }

    fn ensure_open(&self, connection: &Connection) -> Result<(), ErrorMessage> {
        if connection.is_open() {
            Ok(())
        } else {
            Err(ErrorMessage::new(
                gettext("Not connected"),
                connection.alias(),
            ))
        }
    }

    pub fn goto_directory(&self, path: &GnomeCmdPath) -> Result<(), ErrorMessage> {
        let connection = self.connection();
        self.ensure_open(&connection)?;

        debug!('l', "Changing directory to {}", path);
        self.directory.replace(Some(path.clone()));
        self.history.add(path.path());
        if connection.should_remember_dir() {
            connection.set_default_dir(Some(path.clone()));
        }
        Ok(())
    }

    /// Replays a history entry. The cursor only moves when the connection is open.
    fn navigate(
        &self,
        step: impl FnOnce(&History<String>) -> Option<String>,
    ) -> Result<(), ErrorMessage> {
        self.ensure_open(&self.connection())?;
        let Some(dir) = step(&self.history) else {
            return Ok(());
        };
        self.history.lock();
        let result = self.goto_directory(&GnomeCmdPath::new(&dir));
        self.history.unlock();
        result
    }

    pub fn first(&self) -> Result<(), ErrorMessage> {
        self.navigate(History::first)
    }

    pub fn back(&self) -> Result<(), ErrorMessage> {
        self.navigate(History::back)
    }

    pub fn forward(&self) -> Result<(), ErrorMessage> {
        self.navigate(History::forward)
    }

    pub fn last(&self) -> Result<(), ErrorMessage> {
        self.navigate(History::last)
    }

    pub fn can_back(&self) -> bool {
        self.history.can_back()
    }

    pub fn can_forward(&self) -> bool {
        self.history.can_forward()
    }

    pub fn goto_bookmark(&self, bookmark: &Bookmark) -> Result<(), ErrorMessage> {
        self.goto_directory(&bookmark.target())
    }

    /// Opens `connection` if needed and makes it the panel's connection.
    ///
    /// A cancelled open leaves the panel on its current connection.
    pub async fn set_connection(
        &self,
        connection: &Connection,
        options: &dyn ConnectionOptionsRead,
    ) -> Result<(), ErrorMessage> {
        if connection.open_is_needed() && !connection.is_open() {
            connection.open(options).await?;
            if !connection.is_open() {
                debug!('l', "Open of {:?} was cancelled", connection.alias());
                return Ok(());
            }
        }

        self.connection.replace(connection.clone());
        self.directory.replace(None);
        self.history.clear();

        let dir = connection
            .default_dir()
            .or_else(|| connection.base_path())
            .unwrap_or_else(GnomeCmdPath::root);
        self.goto_directory(&dir)
    }
}
