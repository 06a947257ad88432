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

use super::connection::{
    Connection, ConnectionError, ConnectionExt, ConnectionImpl, ConnectionInterface,
    ConnectionState, OpenResult, OpenTask,
};
use crate::path::GnomeCmdPath;
use gettextrs::gettext;
use gio::prelude::*;
use glib::subclass::prelude::*;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct ConnectionHome {}

    #[glib::object_subclass]
    impl ObjectSubclass for ConnectionHome {
        const NAME: &'static str = "GnomeCmdConHome";
        type Type = super::ConnectionHome;
        type ParentType = Connection;
    }

    impl ObjectImpl for ConnectionHome {
        fn constructed(&self) {
            self.parent_constructed();

            let con = self.obj();
            con.set_alias(Some(&gettext("Home")));
            con.set_uri(glib::Uri::parse("file:///", glib::UriFlags::NONE).ok().as_ref());
            con.set_base_path(Some(GnomeCmdPath::new(&glib::home_dir().to_string_lossy())));
            con.set_open_result(OpenResult::Ok);
            con.set_state(ConnectionState::Open);
        }
    }

    impl ConnectionImpl for ConnectionHome {}
}

glib::wrapper! {
    /// The local file system, rooted at `file:///`. Always open.
    pub struct ConnectionHome(ObjectSubclass<imp::ConnectionHome>)
        @extends Connection;
}

impl ConnectionHome {
    pub fn new() -> Self {
        glib::Object::builder().build()
    }
}

impl Default for ConnectionHome {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionInterface for ConnectionHome {
    fn start_open(&self) -> Result<OpenTask, ConnectionError> {
        self.set_open_result(OpenResult::Ok);
        self.set_state(ConnectionState::Open);
        Ok(glib::spawn_future_local(async {}))
    }

    fn cancel_open(&self) {}

    fn close(&self) -> bool {
        false
    }

    fn is_local(&self) -> bool {
        true
    }

    fn open_is_needed(&self) -> bool {
        false
    }

    fn is_closeable(&self) -> bool {
        false
    }

    fn can_show_free_space(&self) -> bool {
        true
    }

    fn go_text(&self) -> Option<String> {
        Some(gettext("Go to: Home"))
    }

    fn go_tooltip(&self) -> Option<String> {
        Some(gettext("Go to: Home"))
    }

    fn open_icon(&self) -> Option<gio::Icon> {
        Some(gio::ThemedIcon::new("user-home").upcast())
    }
}
