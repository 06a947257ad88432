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
use std::{rc::Rc, time::Duration};

pub const GENERAL_SCHEMA_ID: &str = "org.gnome.gnome-commander.preferences.general";

const DEFAULT_GUI_UPDATE_RATE: Duration = Duration::from_millis(100);
const DEFAULT_DIR_HISTORY_SIZE: usize = 20;

pub trait ConnectionOptionsRead {
    /// How often a pending open is polled.
    fn gui_update_rate(&self) -> Duration;

    /// Maximum number of directories a panel remembers.
    fn dir_history_size(&self) -> usize;
}

/// Options backed by the installed GSettings schema.
pub struct GeneralOptions {
    settings: gio::Settings,
    schema: gio::SettingsSchema,
}

impl GeneralOptions {
    /// Returns `None` when the schema is not installed.
    pub fn new() -> Option<Self> {
        let schema = gio::SettingsSchemaSource::default()?.lookup(GENERAL_SCHEMA_ID, true)?;
        let settings = gio::Settings::new_full(&schema, None::<&gio::SettingsBackend>, None);
        Some(Self { settings, schema })
    }

    fn uint(&self, key: &str) -> Option<u32> {
        // reading an absent key aborts inside GIO
        if !self.schema.has_key(key) || self.schema.key(key).value_type().as_str() != "u" {
            return None;
        }
        Some(self.settings.uint(key))
    }
}

impl ConnectionOptionsRead for GeneralOptions {
    fn gui_update_rate(&self) -> Duration {
        self.uint("gui-update-rate")
            .filter(|rate| *rate > 0)
            .map(|rate| Duration::from_millis(rate as u64))
            .unwrap_or(DEFAULT_GUI_UPDATE_RATE)
    }

    fn dir_history_size(&self) -> usize {
        self.uint("dir-history-size")
            .filter(|size| *size > 0)
            .map(|size| size as usize)
            .unwrap_or(DEFAULT_DIR_HISTORY_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticOptions {
    pub gui_update_rate: Duration,
    pub dir_history_size: usize,
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self {
            gui_update_rate: DEFAULT_GUI_UPDATE_RATE,
            dir_history_size: DEFAULT_DIR_HISTORY_SIZE,
        }
    }
}

impl ConnectionOptionsRead for StaticOptions {
    fn gui_update_rate(&self) -> Duration {
        self.gui_update_rate
    }

    fn dir_history_size(&self) -> usize {
        self.dir_history_size
    }
}

pub fn load_options() -> Rc<dyn ConnectionOptionsRead> {
    match GeneralOptions::new() {
        Some(options) => Rc::new(options),
        None => Rc::new(StaticOptions::default()),
    }
}
