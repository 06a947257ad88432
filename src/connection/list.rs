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

use super::{
    connection::{Connection, ConnectionExt, ConnectionInterface},
    home::ConnectionHome,
    remote::ConnectionRemote,
};
use crate::debug::debug;
use gio::prelude::*;
use glib::subclass::prelude::*;

mod imp {
    use super::*;

    pub struct ConnectionList {
        pub home: ConnectionHome,
        pub remotes: gio::ListStore,
    }

    impl Default for ConnectionList {
        fn default() -> Self {
            Self {
                home: ConnectionHome::new(),
                remotes: gio::ListStore::new::<ConnectionRemote>(),
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ConnectionList {
        const NAME: &'static str = "GnomeCmdConList";
        type Type = super::ConnectionList;
    }

    impl ObjectImpl for ConnectionList {}
}

glib::wrapper! {
    pub struct ConnectionList(ObjectSubclass<imp::ConnectionList>);
}

impl Default for ConnectionList {
    fn default() -> Self {
        glib::Object::builder().build()
    }
}

impl ConnectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn home(&self) -> Connection {
        self.imp().home.clone().upcast()
    }

    /// Home first, then remotes in insertion order.
    pub fn all(&self) -> Vec<Connection> {
        std::iter::once(self.home())
            .chain(self.all_remote().into_iter().map(Cast::upcast))
            .collect()
    }

    pub fn all_remote(&self) -> Vec<ConnectionRemote> {
        self.imp()
            .remotes
            .iter::<ConnectionRemote>()
            .flatten()
            .collect()
    }

    pub fn remotes(&self) -> gio::ListModel {
        self.imp().remotes.clone().upcast()
    }

    pub fn add_remote(&self, con: &ConnectionRemote) {
        if self.imp().remotes.find(con).is_none() {
            self.imp().remotes.append(con);
        }
    }

    pub fn remove_remote(&self, con: &ConnectionRemote) {
        let remotes = &self.imp().remotes;
        if let Some(position) = remotes.find(con) {
            debug!('m', "Removing connection {:?}", con.alias());
            con.close();
            remotes.remove(position);
        }
    }

    pub fn find_by_alias(&self, alias: &str) -> Option<Connection> {
        self.all()
            .into_iter()
            .find(|c| c.alias().as_deref() == Some(alias))
    }
}
