/*
 * Copyright 2001-2006 Marcus Bjurman
 * Copyright 2007-2012 Piotr Eljasiak
 * Copyright 2013-2024 Uwe Scholz
 * Copyright 2024-2025 Andrey Kutejko <andy128k@gmail.com>
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

use super::{bookmark::Bookmark, home::ConnectionHome, remote::ConnectionRemote};
use crate::{
    debug::debug,
    options::ConnectionOptionsRead,
    path::{append_path, GnomeCmdPath},
    utils::ErrorMessage,
    vfs::FileInfoSnapshot,
};
use gettextrs::gettext;
use gio::prelude::*;
use glib::subclass::prelude::*;
use std::{fmt, ops::Deref};

mod imp {
    use super::*;
    use glib::subclass::Signal;
    use std::{
        cell::{Cell, RefCell},
        sync::OnceLock,
    };

    pub struct Connection {
        pub uuid: String,
        pub alias: RefCell<Option<String>>,
        pub uri: RefCell<Option<glib::Uri>>,
        pub state: Cell<ConnectionState>,
        pub open_result: RefCell<OpenResult>,
        pub base_path: RefCell<Option<GnomeCmdPath>>,
        pub base_file_info: RefCell<Option<FileInfoSnapshot>>,
        pub default_dir: RefCell<Option<GnomeCmdPath>>,
        pub bookmarks: gio::ListStore,
    }

    impl Default for Connection {
        fn default() -> Self {
            Self {
                uuid: glib::uuid_string_random().to_string(),
                alias: Default::default(),
                uri: Default::default(),
                state: Default::default(),
                open_result: Default::default(),
                base_path: Default::default(),
                base_file_info: Default::default(),
                default_dir: Default::default(),
                bookmarks: gio::ListStore::new::<Bookmark>(),
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Connection {
        const NAME: &'static str = "GnomeCmdCon";
        const ABSTRACT: bool = true;
        type Type = super::Connection;
    }

    impl ObjectImpl for Connection {
        fn constructed(&self) {
            self.parent_constructed();

            let connection = self.obj().downgrade();
            self.bookmarks.connect_items_changed(move |_, _, _, _| {
                if let Some(connection) = connection.upgrade() {
                    connection.emit_by_name::<()>("updated", &[]);
                }
            });
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<Vec<Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| vec![Signal::builder("updated").build()])
        }
    }
}

glib::wrapper! {
    pub struct Connection(ObjectSubclass<imp::Connection>);
}

pub trait ConnectionImpl: ObjectImpl {}

unsafe impl<T: ConnectionImpl> IsSubclassable<T> for Connection {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    Closed,
    Open,
    Opening,
    Cancelling,
}

#[derive(Clone, Debug, Default)]
pub enum OpenResult {
    Ok,
    Failed(Option<glib::Error>, Option<String>),
    InProgress,
    #[default]
    NotStarted,
}

/// How credentials of a remote connection are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Authentication {
    NotRequired,
    SaveForSession,
    SavePermanently,
}

/// Precondition failures of [`ConnectionInterface::start_open`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionError {
    MissingUri,
    AlreadyOpening,
    AlreadyOpen,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingUri => gettext("The connection has no address."),
            Self::AlreadyOpening => gettext("The connection is already being opened."),
            Self::AlreadyOpen => gettext("The connection is already open."),
        };
        f.write_str(&message)
    }
}

impl std::error::Error for ConnectionError {}

/// Completion of an open attempt. Dropping it does not cancel the attempt.
pub type OpenTask = glib::JoinHandle<()>;

pub trait ConnectionExt: IsA<Connection> + 'static {
    fn uuid(&self) -> String {
        self.as_ref().imp().uuid.clone()
    }

    fn alias(&self) -> Option<String> {
        self.as_ref().imp().alias.borrow().clone()
    }

    fn set_alias(&self, alias: Option<&str>) {
        self.as_ref().imp().alias.replace(alias.map(ToOwned::to_owned));
        self.emit_updated();
    }

    fn state(&self) -> ConnectionState {
        self.as_ref().imp().state.get()
    }

    fn set_state(&self, state: ConnectionState) {
        let old_state = self.as_ref().imp().state.replace(state);
        if old_state != state {
            debug!(
                'm',
                "Connection {:?}: {} -> {}",
                self.alias(),
                <&str>::from(old_state),
                <&str>::from(state)
            );
            self.emit_updated();
        }
    }

    fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    fn open_result(&self) -> OpenResult {
        self.as_ref().imp().open_result.borrow().clone()
    }

    fn set_open_result(&self, open_result: OpenResult) {
        self.as_ref().imp().open_result.replace(open_result);
    }

    /// Provider error of the last failed open, as reported by the VFS.
    fn open_failed_reason(&self) -> Option<glib::Error> {
        match *self.as_ref().imp().open_result.borrow() {
            OpenResult::Failed(ref error, _) => error.clone(),
            _ => None,
        }
    }

    fn uri(&self) -> Option<glib::Uri> {
        self.as_ref().imp().uri.borrow().clone()
    }

    fn set_uri(&self, uri: Option<&glib::Uri>) {
        self.as_ref().imp().uri.replace(uri.cloned());
    }

    fn base_path(&self) -> Option<GnomeCmdPath> {
        self.as_ref().imp().base_path.borrow().clone()
    }

    fn set_base_path(&self, path: Option<GnomeCmdPath>) {
        self.as_ref().imp().base_path.replace(path);
    }

    fn base_file_info(&self) -> Option<FileInfoSnapshot> {
        self.as_ref().imp().base_file_info.borrow().clone()
    }

    fn set_base_file_info(&self, file_info: Option<FileInfoSnapshot>) {
        self.as_ref().imp().base_file_info.replace(file_info);
    }

    fn default_dir(&self) -> Option<GnomeCmdPath> {
        self.as_ref().imp().default_dir.borrow().clone()
    }

    fn set_default_dir(&self, dir: Option<GnomeCmdPath>) {
        self.as_ref().imp().default_dir.replace(dir);
    }

    /// Appends `path` to the connection URI. Nothing is normalized.
    fn create_uri(&self, path: &GnomeCmdPath) -> Option<glib::Uri> {
        let uri = self.uri()?;
        let path = append_path(&uri.path(), path.as_str());
        Some(glib::Uri::build_with_user(
            uri.flags(),
            &uri.scheme(),
            uri.user().as_deref(),
            uri.password().as_deref(),
            uri.auth_params().as_deref(),
            uri.host().as_deref(),
            uri.port(),
            &path,
            uri.query().as_deref(),
            uri.fragment().as_deref(),
        ))
    }

    fn create_gfile(&self, path: &GnomeCmdPath) -> Option<gio::File> {
        let uri = self.create_uri(path)?;
        Some(gio::File::for_uri(&uri.to_str()))
    }

    fn add_bookmark(&self, bookmark: &Bookmark) {
        self.as_ref().imp().bookmarks.append(bookmark)
    }

    fn erase_bookmarks(&self) {
        self.as_ref().imp().bookmarks.remove_all()
    }

    fn bookmarks(&self) -> gio::ListModel {
        self.as_ref().imp().bookmarks.clone().upcast()
    }

    fn replace_bookmark(&self, old_bookmark: &Bookmark, new_bookmark: &Bookmark) {
        let bookmarks = &self.as_ref().imp().bookmarks;
        if let Some(position) = bookmarks.find(old_bookmark) {
            bookmarks.splice(position, 1, &[new_bookmark.clone()]);
        }
    }

    fn move_bookmark_up(&self, bookmark: &Bookmark) -> Option<u32> {
        let bookmarks = &self.as_ref().imp().bookmarks;
        let position = bookmarks.find(bookmark)?;
        if position > 0 {
            bookmarks.remove(position);
            bookmarks.insert(position - 1, bookmark);
            Some(position - 1)
        } else {
            None
        }
    }

    fn move_bookmark_down(&self, bookmark: &Bookmark) -> Option<u32> {
        let bookmarks = &self.as_ref().imp().bookmarks;
        let position = bookmarks.find(bookmark)?;
        if position + 1 < bookmarks.n_items() {
            bookmarks.remove(position);
            bookmarks.insert(position + 1, bookmark);
            Some(position + 1)
        } else {
            None
        }
    }

    fn remove_bookmark(&self, bookmark: &Bookmark) {
        let bookmarks = &self.as_ref().imp().bookmarks;
        if let Some(position) = bookmarks.find(bookmark) {
            bookmarks.remove(position);
        }
    }

    fn emit_updated(&self) {
        self.as_ref().emit_by_name::<()>("updated", &[]);
    }

    fn connect_updated<F: Fn() + 'static>(&self, f: F) -> glib::SignalHandlerId {
        self.as_ref().connect_local("updated", false, move |_| {
            (f)();
            None
        })
    }

    /// Opens the connection and waits until the attempt settles.
    ///
    /// A cancelled attempt is not an error; check [`ConnectionExt::is_open`].
    async fn open(&self, options: &dyn ConnectionOptionsRead) -> Result<(), ErrorMessage> {
        let connection: &Connection = self.as_ref();
        match connection.start_open() {
            Ok(_) | Err(ConnectionError::AlreadyOpening) => {}
            Err(ConnectionError::AlreadyOpen) => return Ok(()),
            Err(error) => {
                return Err(ErrorMessage::with_error(
                    gettext("Failed to open a connection."),
                    &error,
                ))
            }
        }

        loop {
            glib::timeout_future(options.gui_update_rate()).await;
            match self.state() {
                ConnectionState::Opening => {}
                ConnectionState::Open => {
                    debug!('m', "OPEN_OK detected");
                    break Ok(());
                }
                ConnectionState::Cancelling => {
                    debug!('m', "OPEN_CANCELLED detected");
                    break Ok(());
                }
                ConnectionState::Closed => {
                    debug!('m', "OPEN_FAILED detected");
                    let (error, message) = match self.open_result() {
                        OpenResult::Failed(error, message) => (error, message),
                        _ => (None, None),
                    };
                    break Err(ErrorMessage {
                        message: message.unwrap_or_else(|| gettext("Failed to open a connection.")),
                        secondary_text: error.map(|e| e.message().to_owned()),
                    });
                }
            }
        }
    }
}

impl<O: IsA<Connection>> ConnectionExt for O {}

impl Deref for Connection {
    type Target = dyn ConnectionInterface;

    fn deref(&self) -> &Self::Target {
        if let Some(home) = self.downcast_ref::<ConnectionHome>() {
            home
        } else if let Some(remote) = self.downcast_ref::<ConnectionRemote>() {
            remote
        } else {
            unreachable!()
        }
    }
}

pub trait ConnectionInterface {
    /// Moves the connection towards Open. State changes before this returns;
    /// the outcome is applied by the returned task on the owning thread.
    fn start_open(&self) -> Result<OpenTask, ConnectionError>;

    fn cancel_open(&self);

    /// Returns `false` if the connection cannot be closed.
    fn close(&self) -> bool;

    fn is_local(&self) -> bool;

    fn open_is_needed(&self) -> bool;

    fn is_closeable(&self) -> bool;

    fn should_remember_dir(&self) -> bool {
        true
    }

    fn needs_open_visprog(&self) -> bool {
        false
    }

    /// Defines if a graphical progress bar should be drawn when opening a folder
    fn needs_list_visprog(&self) -> bool {
        false
    }

    fn can_show_free_space(&self) -> bool {
        false
    }

    fn open_message(&self) -> Option<String> {
        None
    }

    fn go_text(&self) -> Option<String> {
        None
    }

    fn open_text(&self) -> Option<String> {
        None
    }

    fn close_text(&self) -> Option<String> {
        None
    }

    fn go_tooltip(&self) -> Option<String> {
        None
    }

    fn open_tooltip(&self) -> Option<String> {
        None
    }

    fn close_tooltip(&self) -> Option<String> {
        None
    }

    fn go_icon(&self) -> Option<gio::Icon> {
        self.open_icon()
    }

    fn open_icon(&self) -> Option<gio::Icon>;

    fn close_icon(&self) -> Option<gio::Icon> {
        let icon = self.open_icon()?;
        let unmount = gio::ThemedIcon::new("overlay_umount");
        let emblem = gio::Emblem::new(&unmount);
        Some(gio::EmblemedIcon::new(&icon, Some(&emblem)).upcast())
    }
}
